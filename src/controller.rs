use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cartpole::{self, Force, InputVariables, DEFAULT_RULES};
use crate::error::Result;
use crate::inference::InferenceEngine;
use crate::inputs::{Fuzzified, Inputs};
use crate::ops::{AndOp, OrOp};
use crate::rules::Rules;
use crate::terms::Terms;
use crate::variable::Variables;

/// One snapshot of the simulated world. Angles are in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub position: f64,
    pub velocity: f64,
    pub angle: f64,
    pub angular_velocity: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// FCL document to read rules from; the bundled cart-pole rules if unset
    pub rules: Option<PathBuf>,
    pub and_op: AndOp,
    pub or_op: OrOp,
}

impl ControllerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Turns world snapshots into a cart force. Everything it holds is built at
/// construction and only read afterwards.
pub struct FuzzyController {
    vars: Variables,
    inputs: InputVariables,
    rules: Rules<Force>,
    terms: Terms<Force>,
    engine: InferenceEngine,
}

impl FuzzyController {
    pub fn new(config: &ControllerConfig) -> Result<Self> {
        let mut vars = Variables::new();
        let inputs = cartpole::register(&mut vars)?;
        let terms = cartpole::force_terms();
        let rules = match &config.rules {
            Some(path) => Rules::load(path, &vars, &terms)?,
            None => Rules::parse(DEFAULT_RULES, &vars, &terms)?,
        };

        tracing::debug!(rules = rules.len(), and_op = ?config.and_op, or_op = ?config.or_op, "controller ready");

        Ok(Self {
            vars,
            inputs,
            rules,
            terms,
            engine: InferenceEngine::new(config.and_op, config.or_op),
        })
    }

    /// A controller over an in-memory FCL document
    pub fn from_rules(source: &str, engine: InferenceEngine) -> Result<Self> {
        let mut vars = Variables::new();
        let inputs = cartpole::register(&mut vars)?;
        let terms = cartpole::force_terms();
        let rules = Rules::parse(source, &vars, &terms)?;

        Ok(Self {
            vars,
            inputs,
            rules,
            terms,
            engine,
        })
    }

    pub fn rules(&self) -> &Rules<Force> {
        &self.rules
    }

    /// Maps a snapshot to crisp inputs: angles to degrees, the pole angle
    /// folded into [0, 180) since orientations half a turn apart call for the
    /// same control.
    pub fn make_inputs(&self, world: &WorldState) -> Inputs {
        let mut inputs = Inputs::new();

        inputs.add(self.inputs.pv, world.angular_velocity.to_degrees());
        inputs.add(self.inputs.pa, world.angle.to_degrees().rem_euclid(180.));
        inputs.add(self.inputs.cp, world.position);
        inputs.add(self.inputs.cv, world.velocity);

        inputs
    }

    pub fn fuzzify(&self, world: &WorldState) -> Fuzzified {
        self.vars.fuzzify(&self.make_inputs(world))
    }

    /// The force to apply to the cart for this tick
    pub fn decide(&self, world: &WorldState) -> f64 {
        let force = self
            .engine
            .eval(&self.vars, &self.rules, &self.terms, &self.make_inputs(world));

        tracing::trace!(?world, force, "decided");

        force
    }
}
