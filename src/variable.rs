use slotmap::{new_key_type, SlotMap};

use crate::dsl::Expr;
use crate::error::{Error, Result};
use crate::inputs::{Fuzzified, Inputs};
use crate::linspace::Linspace;
use crate::shape::Shape;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// A handle to a variable registered in [`Variables`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variable(pub(crate) VariableKey);

impl Variable {
    pub fn key(&self) -> VariableKey {
        self.0
    }
}

/// How crisp values are brought into a variable's operating domain before
/// fuzzification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Domain {
    /// Values beyond the bounds saturate to the nearest bound
    Saturating { min: f64, max: f64 },
    /// Values wrap around `[0, period)`
    Circular { period: f64 },
}

impl Domain {
    pub fn normalize(&self, x: f64) -> f64 {
        match *self {
            Domain::Saturating { min, max } => x.clamp(min, max),
            Domain::Circular { period } => x.rem_euclid(period),
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Domain::Saturating { min, max } => (min, max),
            Domain::Circular { period } => (0., period),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet {
    name: String,
    shape: Shape,
}

impl FuzzySet {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        FuzzySet {
            name: name.into(),
            shape,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn membership(&self, x: f64) -> f64 {
        self.shape.membership(x)
    }
}

/// A named physical input together with its ordered fuzzy sets.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    domain: Domain,
    sets: Vec<FuzzySet>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        LinguisticVariable {
            name: name.into(),
            domain,
            sets: Vec::new(),
        }
    }

    /// Appends a set, rejecting a name that is already taken
    pub fn with_set(mut self, set: FuzzySet) -> Result<Self> {
        if self.set_index(set.name()).is_ok() {
            return Err(Error::Duplicate(format!("{}.{}", self.name, set.name)));
        }

        self.sets.push(set);

        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    pub fn set_index(&self, set_name: &str) -> Result<usize> {
        self.sets
            .iter()
            .position(|set| set.name == set_name)
            .ok_or_else(|| Error::UnknownSet {
                variable: self.name.clone(),
                set: set_name.to_owned(),
            })
    }

    /// Membership of every set, in declaration order, zeros included
    pub fn fuzzify(&self, x: f64) -> Vec<f64> {
        let x = self.domain.normalize(x);

        self.sets.iter().map(|set| set.membership(x)).collect()
    }

    /// `fuzzify` paired with the set names
    pub fn fuzzify_named(&self, x: f64) -> Vec<(&str, f64)> {
        self.sets.iter().map(FuzzySet::name).zip(self.fuzzify(x)).collect()
    }

    pub fn get_membership(&self, set_name: &str, x: f64) -> Result<f64> {
        let index = self.set_index(set_name)?;

        Ok(self.sets[index].membership(self.domain.normalize(x)))
    }

    /// Samples the operating domain every `step` units
    pub fn universe(&self, step: f64) -> Linspace<f64> {
        let (min, max) = self.domain.bounds();

        Linspace::with_step(min, max, step)
    }
}

#[derive(Default)]
pub struct Variables(pub(crate) SlotMap<VariableKey, LinguisticVariable>);

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    pub fn add(&mut self, variable: LinguisticVariable) -> Result<Variable> {
        if self.find(variable.name()).is_some() {
            return Err(Error::Duplicate(variable.name));
        }

        Ok(Variable(self.0.insert(variable)))
    }

    pub fn get(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.0.get(key)
    }

    pub fn find(&self, name: &str) -> Option<VariableKey> {
        self.0
            .iter()
            .find_map(|(key, variable)| (variable.name == name).then_some(key))
    }

    /// Builds the atomic proposition `<variable> IS <set>`
    pub fn is(&self, variable: Variable, set_name: &str) -> Result<Expr> {
        let linguistic = self
            .0
            .get(variable.0)
            .ok_or_else(|| Error::UnknownVariable("handle not registered in this `Variables`".to_owned()))?;

        Ok(Expr::Is(variable.0, linguistic.set_index(set_name)?))
    }

    /// Converts crisp inputs to set memberships. A variable without an input
    /// fuzzifies to all zeros.
    pub fn fuzzify(&self, inputs: &Inputs) -> Fuzzified {
        let mut fuzzified = Fuzzified::with_capacity(self.0.len());

        for (key, variable) in &self.0 {
            let degrees = match inputs.0.get(&key) {
                Some(&x) => variable.fuzzify(x),
                None => {
                    tracing::warn!(variable = %variable.name, "no input supplied, fuzzifying to zero");
                    vec![0.; variable.sets.len()]
                },
            };

            fuzzified.0.insert(key, degrees);
        }

        fuzzified
    }
}

#[test]
fn test_unknown_set() {
    let variable = LinguisticVariable::new("cp", Domain::Saturating { min: -1., max: 1. })
        .with_set(FuzzySet::new("stop", Shape::triangle("stop", -1., 0., 1.).unwrap()))
        .unwrap();

    assert_eq!(variable.get_membership("stop", 0.5).unwrap(), 0.5);

    match variable.get_membership("sideways", 0.) {
        Err(Error::UnknownSet { variable, set }) => {
            assert_eq!(variable, "cp");
            assert_eq!(set, "sideways");
        },
        other => panic!("expected unknown set, got {other:?}"),
    }
}

#[test]
fn test_duplicate_sets_and_variables_rejected() {
    let shape = Shape::triangle("stop", -1., 0., 1.).unwrap();
    let variable = LinguisticVariable::new("cp", Domain::Saturating { min: -1., max: 1. })
        .with_set(FuzzySet::new("stop", shape.clone()))
        .unwrap();

    assert!(variable.clone().with_set(FuzzySet::new("stop", shape)).is_err());

    let mut vars = Variables::new();
    vars.add(variable.clone()).unwrap();

    assert!(vars.add(variable).is_err());
}

#[test]
fn test_domains_normalize() {
    let saturating = Domain::Saturating { min: -5., max: 5. };
    let circular = Domain::Circular { period: 360. };

    assert_eq!(saturating.normalize(-7.), -5.);
    assert_eq!(saturating.normalize(2.), 2.);
    assert_eq!(circular.normalize(370.), 10.);
    assert_eq!(circular.normalize(-90.), 270.);
    assert_eq!(circular.normalize(360.), 0.);
}

#[test]
fn test_missing_input_fuzzifies_to_zero() {
    let mut vars = Variables::new();
    let cp = vars
        .add(
            LinguisticVariable::new("cp", Domain::Saturating { min: -1., max: 1. })
                .with_set(FuzzySet::new("stop", Shape::triangle("stop", -1., 0., 1.).unwrap()))
                .unwrap(),
        )
        .unwrap();
    let fuzzified = vars.fuzzify(&Inputs::new());

    assert_eq!(fuzzified.degrees(cp.key()), Some(&[0.][..]));
}

#[test]
fn test_foreign_handle_is_reported_without_key_internals() {
    let variable = || {
        LinguisticVariable::new("cp", Domain::Saturating { min: -1., max: 1. })
            .with_set(FuzzySet::new("stop", Shape::triangle("stop", -1., 0., 1.).unwrap()))
            .unwrap()
    };
    let mut other = Variables::new();
    let foreign = other.add(variable()).unwrap();

    match Variables::new().is(foreign, "stop") {
        Err(err @ Error::UnknownVariable(_)) => {
            let message = err.to_string();

            assert!(message.contains("not registered"), "{message}");
            assert!(!message.contains("VariableKey"), "{message}");
        },
        other => panic!("expected an unknown variable, got {other:?}"),
    }
}
