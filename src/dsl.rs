use crate::inputs::Fuzzified;
use crate::ops::{AndOp, OrOp};
use crate::variable::VariableKey;

/// A rule premise: atomic `<variable> IS <set>` propositions joined by binary
/// connectives. The set is stored as its index within the variable.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Is(VariableKey, usize),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    /// Reduces the premise to a single degree given this tick's memberships
    pub fn eval(&self, facts: &Fuzzified, and_op: AndOp, or_op: OrOp) -> f64 {
        match self {
            Expr::Is(var_key, set) => facts.degree(*var_key, *set),
            Expr::And(lhs, rhs) => and_op.call(lhs.eval(facts, and_op, or_op), rhs.eval(facts, and_op, or_op)),
            Expr::Or(lhs, rhs) => or_op.call(lhs.eval(facts, and_op, or_op), rhs.eval(facts, and_op, or_op)),
        }
    }
}
