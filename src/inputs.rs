use std::collections::HashMap;

use slotmap::SecondaryMap;

use crate::variable::{Variable, VariableKey};

/// Crisp values for one control tick
#[derive(Clone, Debug, Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    pub fn add(&mut self, var: Variable, val: f64) {
        self.0.insert(var.0, val);
    }

    pub fn get(&self, var: Variable) -> Option<f64> {
        self.0.get(&var.0).copied()
    }
}

/// Per-variable set memberships for one control tick, in each variable's
/// set declaration order. Read-only once produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fuzzified(pub(crate) SecondaryMap<VariableKey, Vec<f64>>);

impl Fuzzified {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Fuzzified(SecondaryMap::with_capacity(capacity))
    }

    pub fn degrees(&self, key: VariableKey) -> Option<&[f64]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Degree of a single set; absent entries count as zero
    pub fn degree(&self, key: VariableKey, set: usize) -> f64 {
        self.0
            .get(key)
            .and_then(|degrees| degrees.get(set))
            .copied()
            .unwrap_or(0.)
    }
}
