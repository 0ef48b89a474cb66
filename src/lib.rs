//! Mamdani-style fuzzy inference for balancing a cart-pole.
//!
//! Four crisp measurements are fuzzified against piecewise-linear sets,
//! pushed through a textual rule base with max aggregation, and turned back
//! into a single cart force by trapezoid-centroid defuzzification.
//!
//! ```no_run
//! use fuzzy_cartpole::{ControllerConfig, FuzzyController, WorldState};
//!
//! let controller = FuzzyController::new(&ControllerConfig::default())?;
//! let force = controller.decide(&WorldState {
//!     position: 0.5,
//!     velocity: 0.,
//!     angle: std::f64::consts::FRAC_PI_2,
//!     angular_velocity: 0.1,
//! });
//! # Ok::<(), fuzzy_cartpole::Error>(())
//! ```

pub mod cartpole;
mod controller;
mod defuzz;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod ops;
mod outputs;
mod parser;
mod rules;
mod shape;
mod terms;
mod variable;

pub use controller::{ControllerConfig, FuzzyController, WorldState};
pub use defuzz::defuzzify;
pub use dsl::Expr;
pub use error::{Error, Result};
pub use inference::InferenceEngine;
pub use inputs::{Fuzzified, Inputs};
pub use linspace::Linspace;
pub use ops::{AndOp, OrOp};
pub use outputs::Outputs;
pub use parser::{parse_rule, rule_statements};
pub use rules::{Rule, Rules};
pub use shape::{Shape, Triangle};
pub use terms::{Key, OutputTerm, Term, Terms};
pub use variable::{Domain, FuzzySet, LinguisticVariable, Variable, VariableKey, Variables};
