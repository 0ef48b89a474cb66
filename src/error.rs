use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no set named `{set}` on variable `{variable}`")]
    UnknownSet { variable: String, set: String },

    #[error("unknown variable `{0}`")]
    UnknownVariable(String),

    #[error("`{0}` is declared twice")]
    Duplicate(String),

    #[error("malformed rule `{rule}`: {reason}")]
    RuleParse { rule: String, reason: String },

    #[error("rule base not found at {}", .0.display())]
    RuleSourceNotFound(PathBuf),

    #[error("failed to read rule base")]
    Io(#[from] std::io::Error),

    /// Breakpoints must be sorted by x with degrees in [0, 1]
    #[error("invalid shape for set `{set}`: {reason}")]
    InvalidShape { set: String, reason: String },

    #[error("invalid controller configuration")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(rule: &str, reason: impl Into<String>) -> Self {
        Error::RuleParse {
            rule: rule.trim().to_owned(),
            reason: reason.into(),
        }
    }
}
