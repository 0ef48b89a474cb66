use num::Float;
use serde::{Deserialize, Serialize};

/// And operator method for combining the propositions of a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AndOp {
    /// Boolean-truthiness conjunction: `u` when `u` is zero, otherwise `v`.
    /// Agrees with `Min` whenever either operand is zero, but yields `v`
    /// rather than the smaller degree when both are nonzero.
    #[default]
    Truthy,
    Min,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Truthy => {
                if u == F::zero() {
                    u
                } else {
                    v
                }
            },
            Self::Min => F::min(u, v),
        }
    }
}

/// Or operator method for combining the propositions of a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrOp {
    /// Boolean-truthiness disjunction: `u` when `u` is nonzero, otherwise `v`.
    /// Agrees with `Max` whenever either operand is zero.
    #[default]
    Truthy,
    Max,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Truthy => {
                if u != F::zero() {
                    u
                } else {
                    v
                }
            },
            Self::Max => F::max(u, v),
        }
    }
}

#[test]
fn test_truthy_and() {
    assert_eq!(AndOp::Truthy.call(0., 0.8), 0.);
    assert_eq!(AndOp::Truthy.call(0.8, 0.), 0.);
    assert_eq!(AndOp::Truthy.call(0.3, 0.8), 0.8);
    assert_eq!(AndOp::Truthy.call(0.8, 0.3), 0.3);
    assert_eq!(AndOp::Min.call(0.3, 0.8), 0.3);
}

#[test]
fn test_truthy_or() {
    assert_eq!(OrOp::Truthy.call(0., 0.8), 0.8);
    assert_eq!(OrOp::Truthy.call(0.8, 0.), 0.8);
    assert_eq!(OrOp::Truthy.call(0.3, 0.8), 0.3);
    assert_eq!(OrOp::Max.call(0.3, 0.8), 0.8);
}

#[test]
fn test_truthy_matches_min_max_when_an_operand_is_zero() {
    for x in [0., 0.25, 1.] {
        assert_eq!(AndOp::Truthy.call(0., x), AndOp::Min.call(0., x));
        assert_eq!(AndOp::Truthy.call(x, 0.), AndOp::Min.call(x, 0.));
        assert_eq!(OrOp::Truthy.call(0., x), OrOp::Max.call(0., x));
        assert_eq!(OrOp::Truthy.call(x, 0.), OrOp::Max.call(x, 0.));
    }
}
