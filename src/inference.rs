use crate::defuzz::defuzzify;
use crate::inputs::{Fuzzified, Inputs};
use crate::ops::{AndOp, OrOp};
use crate::outputs::Outputs;
use crate::rules::{Rule, Rules};
use crate::terms::{OutputTerm, Terms};
use crate::variable::Variables;

/// Mamdani inference with max aggregation. Holds no per-tick state, so one
/// engine can serve any number of independent evaluations.
#[derive(Clone, Copy, Debug, Default)]
pub struct InferenceEngine {
    and_op: AndOp,
    or_op: OrOp,
}

impl InferenceEngine {
    pub fn new(and_op: AndOp, or_op: OrOp) -> Self {
        Self { and_op, or_op }
    }

    pub fn firing_strength<K>(&self, rule: &Rule<K>, facts: &Fuzzified) -> f64 {
        rule.premise.eval(facts, self.and_op, self.or_op)
    }

    /// Fires every rule and keeps, per output term, the strongest firing.
    ///
    /// # Panics
    ///
    /// When an aggregated degree leaves [0, 1].
    pub fn infer<K: OutputTerm>(&self, rules: &Rules<K>, facts: &Fuzzified) -> Outputs<K> {
        let mut outputs = Outputs::new();

        for rule in rules.iter() {
            outputs.raise(rule.consequence, self.firing_strength(rule, facts));
        }

        outputs
    }

    /// Fuzzification, inference and defuzzification in one pass
    pub fn eval<K: OutputTerm>(&self, vars: &Variables, rules: &Rules<K>, terms: &Terms<K>, inputs: &Inputs) -> f64 {
        let facts = vars.fuzzify(inputs);
        let outputs = self.infer(rules, &facts);
        let crisp = defuzzify(&outputs, terms);

        tracing::trace!(?outputs, crisp, "inference pass");

        crisp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartpole::{self, Force, InputVariables};
    use crate::math::assert_close;

    fn setup(rules: &str) -> (Variables, InputVariables, Rules<Force>, Terms<Force>) {
        let mut vars = Variables::new();
        let handles = cartpole::register(&mut vars).unwrap();
        let terms = cartpole::force_terms();
        let rules = Rules::parse(rules, &vars, &terms).unwrap();

        (vars, handles, rules, terms)
    }

    fn inputs(handles: &InputVariables, pv: f64, pa: f64, cp: f64, cv: f64) -> Inputs {
        let mut inputs = Inputs::new();

        inputs.add(handles.pv, pv);
        inputs.add(handles.pa, pa);
        inputs.add(handles.cp, cp);
        inputs.add(handles.cv, cv);

        inputs
    }

    #[test]
    fn test_max_aggregation() {
        let (vars, handles, rules, _) = setup(
            "RULE 1 : IF cp IS stop THEN force IS stop;\n\
             RULE 2 : IF cv IS stop THEN force IS stop;\n\
             RULE 3 : IF cp IS right_near THEN force IS left_slow;\n",
        );
        // cp 1.25 is half stop, half right_near; cv 0.25 is 0.75 stop
        let facts = vars.fuzzify(&inputs(&handles, 0., 90., 1.25, 0.25));
        let outputs = InferenceEngine::default().infer(&rules, &facts);

        assert_close(outputs.get(Force::Stop), 0.75);
        assert_close(outputs.get(Force::LeftSlow), 0.5);
        assert_eq!(outputs.get(Force::RightFast), 0.);
        assert_eq!(outputs.active().count(), 2);
    }

    #[test]
    fn test_connective_semantics_are_configurable() {
        let (vars, handles, rules, _) = setup("RULE 1 : IF cp IS stop AND cv IS stop THEN force IS stop;\n");
        // cp stop = 0.5, cv stop = 0.75
        let facts = vars.fuzzify(&inputs(&handles, 0., 90., 1.25, 0.25));
        let truthy = InferenceEngine::default().infer(&rules, &facts);
        let min_max = InferenceEngine::new(AndOp::Min, OrOp::Max).infer(&rules, &facts);

        assert_close(truthy.get(Force::Stop), 0.75);
        assert_close(min_max.get(Force::Stop), 0.5);
    }

    #[test]
    fn test_eval_is_repeatable() {
        let (vars, handles, _, terms) = setup("");
        let rules = Rules::parse(cartpole::DEFAULT_RULES, &vars, &terms).unwrap();
        let engine = InferenceEngine::default();
        let inputs = inputs(&handles, -35., 75., 3.3, -0.6);
        let facts = vars.fuzzify(&inputs);

        assert_eq!(engine.infer(&rules, &facts), engine.infer(&rules, &vars.fuzzify(&inputs)));
        assert_eq!(
            engine.eval(&vars, &rules, &terms, &inputs),
            engine.eval(&vars, &rules, &terms, &inputs)
        );
    }

    #[test]
    fn test_empty_rule_base_yields_zero() {
        let (vars, handles, rules, terms) = setup("");

        assert_eq!(
            InferenceEngine::default().eval(&vars, &rules, &terms, &inputs(&handles, 50., 120., -3., 1.)),
            0.
        );
    }

    #[test]
    fn test_programmatic_rules() {
        let (vars, handles, mut rules, _) = setup("");
        let premise = vars
            .is(handles.cp, "stop")
            .unwrap()
            .and(vars.is(handles.cv, "stop").unwrap());

        rules.add(premise, Force::Stop);
        rules.add(vars.is(handles.cp, "right_near").unwrap(), Force::LeftSlow);

        // cp stop = 0.5, right_near = 0.5; cv stop = 0.75
        let facts = vars.fuzzify(&inputs(&handles, 0., 90., 1.25, 0.25));
        let outputs = InferenceEngine::new(AndOp::Min, OrOp::Max).infer(&rules, &facts);

        assert_eq!(rules.len(), 2);
        assert_close(outputs.get(Force::Stop), 0.5);
        assert_close(outputs.get(Force::LeftSlow), 0.5);
        assert_eq!(outputs.get(Force::RightFast), 0.);
    }
}
