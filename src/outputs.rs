use std::fmt;

use fixed_map::Map as FixedMap;

use crate::terms::OutputTerm;

/// The aggregated conclusion of one inference pass: a degree per output term,
/// the maximum firing strength among the rules concluding it.
pub struct Outputs<K: OutputTerm>(FixedMap<K, f64>);

impl<K: OutputTerm> Outputs<K> {
    pub(crate) fn new() -> Self {
        Outputs(FixedMap::new())
    }

    /// Raises `term` to `degree` if that is larger than what it holds.
    ///
    /// # Panics
    ///
    /// When the resulting degree falls outside [0, 1]; that can only come from
    /// a defect in membership or connective arithmetic.
    pub(crate) fn raise(&mut self, term: K, degree: f64) {
        let current = self.get(term);
        let aggregated = f64::max(current, degree);

        assert!(
            (0. ..=1.).contains(&aggregated),
            "aggregated degree {aggregated} for {term:?} is outside [0, 1]"
        );

        self.0.insert(term, aggregated);
    }

    /// Terms never concluded read as zero
    pub fn get(&self, term: K) -> f64 {
        self.0.get(term).copied().unwrap_or(0.)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        K::ALL.iter().map(|&term| (term, self.get(term)))
    }

    /// Terms with a degree strictly above zero
    pub fn active(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.iter().filter(|&(_, degree)| degree > 0.)
    }
}

impl<K: OutputTerm> Default for Outputs<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: OutputTerm> Clone for Outputs<K> {
    fn clone(&self) -> Self {
        let mut outputs = Self::new();

        for (term, degree) in self.active() {
            outputs.0.insert(term, degree);
        }

        outputs
    }
}

impl<K: OutputTerm> PartialEq for Outputs<K> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: OutputTerm> fmt::Debug for Outputs<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(term, degree)| (term.name(), degree))).finish()
    }
}
