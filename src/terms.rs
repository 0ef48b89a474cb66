use std::fmt::Debug;

pub use fixed_map::Key as Term;
pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::shape::Triangle;

/// A closed vocabulary of output sets, usually a field-less enum deriving
/// [`Key`].
pub trait OutputTerm: Term + Eq + Debug + 'static {
    /// Every term, in declaration order
    const ALL: &'static [Self];

    /// The name rules use to refer to this term
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|term| term.name() == name)
    }
}

/// The output variable: its name and the triangle backing each term.
pub struct Terms<K: Term> {
    variable: String,
    shapes: FixedMap<K, Triangle>,
}

impl<K: OutputTerm> Terms<K> {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            shapes: FixedMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, value: Triangle) {
        self.shapes.insert(key, value);
    }

    pub fn get(&self, key: K) -> Option<&Triangle> {
        self.shapes.get(key)
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Terms that have a shape registered, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (K, &Triangle)> + '_ {
        K::ALL
            .iter()
            .filter_map(|&key| self.shapes.get(key).map(|shape| (key, shape)))
    }
}
