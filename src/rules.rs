use std::fs;
use std::io;
use std::path::Path;

use crate::dsl::Expr;
use crate::error::{Error, Result};
use crate::parser::{parse_rule, rule_statements};
use crate::terms::{OutputTerm, Terms};
use crate::variable::Variables;

/// An ordered rule base. Built once, read-only afterwards.
#[derive(Debug)]
pub struct Rules<K>(pub(crate) Vec<Rule<K>>);

impl<K: OutputTerm> Rules<K> {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn add(&mut self, premise: Expr, consequence: K) {
        self.0.push(Rule { premise, consequence });
    }

    /// Parses every `RULE n : …` line of an FCL-style document. Any malformed
    /// statement fails the whole load.
    pub fn parse(source: &str, vars: &Variables, terms: &Terms<K>) -> Result<Self> {
        let mut rules = Rules::new();

        for statement in rule_statements(source) {
            rules.0.push(parse_rule(statement?, vars, terms)?);
        }

        Ok(rules)
    }

    pub fn load(path: impl AsRef<Path>, vars: &Variables, terms: &Terms<K>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::RuleSourceNotFound(path.to_owned()),
            _ => Error::Io(err),
        })?;
        let rules = Self::parse(&source, vars, terms)?;

        tracing::debug!(path = %path.display(), rules = rules.len(), "loaded rule base");

        Ok(rules)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<K>> {
        self.0.iter()
    }
}

impl<K: OutputTerm> Default for Rules<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule<K> {
    pub premise: Expr,
    pub consequence: K,
}
