//! Textual rule statements: `IF <premise> THEN <variable> IS <set>;`
//!
//! Premises are atomic `<variable> IS <set>` comparisons joined by `AND`/`OR`.
//! `AND` binds tighter than `OR`, both associate to the left, and parentheses
//! group. Keywords are case-insensitive.

use crate::dsl::Expr;
use crate::error::{Error, Result};
use crate::rules::Rule;
use crate::terms::{OutputTerm, Terms};
use crate::variable::Variables;

const RULE_MARKER: &str = "RULE ";

/// Pulls rule statements out of an FCL-style document: every line starting
/// with `RULE ` contributes whatever follows its first `:`. Other lines are
/// ignored.
pub fn rule_statements(source: &str) -> impl Iterator<Item = Result<&str>> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(RULE_MARKER))
        .map(|line| match line.split_once(':') {
            Some((_, statement)) => Ok(statement.trim()),
            None => Err(Error::parse(line, "expected `:` after the rule marker")),
        })
}

#[derive(Clone, Debug, PartialEq)]
enum Token<'s> {
    Word(&'s str),
    Open,
    Close,
    Semi,
}

fn tokenize(statement: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut chars = statement.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            ';' => tokens.push(Token::Semi),
            c if c.is_whitespace() => {},
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = start + c.len_utf8();

                while let Some(&(i, c)) = chars.peek() {
                    if !(c.is_ascii_alphanumeric() || c == '_') {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }

                tokens.push(Token::Word(&statement[start..end]));
            },
            c => return Err(Error::parse(statement, format!("unexpected character `{c}`"))),
        }
    }

    Ok(tokens)
}

struct Parser<'s, 'v> {
    statement: &'s str,
    tokens: Vec<Token<'s>>,
    pos: usize,
    vars: &'v Variables,
}

impl<'s, 'v> Parser<'s, 'v> {
    fn error(&self, reason: impl Into<String>) -> Error {
        Error::parse(self.statement, reason)
    }

    fn peek(&self) -> Option<&Token<'s>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token<'s>> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(Token::Word(word)) if word.eq_ignore_ascii_case(keyword))
    }

    fn keyword(&mut self, keyword: &str) -> Result<()> {
        if self.peek_keyword(keyword) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected `{keyword}`")))
        }
    }

    fn ident(&mut self, what: &str) -> Result<&'s str> {
        match self.advance() {
            Some(Token::Word(word)) if !is_keyword(word) => Ok(word),
            _ => Err(self.error(format!("expected {what}"))),
        }
    }

    fn or_expr(&mut self) -> Result<Expr> {
        let mut expr = self.and_expr()?;

        while self.peek_keyword("OR") {
            self.pos += 1;
            expr = expr.or(self.and_expr()?);
        }

        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<Expr> {
        let mut expr = self.primary()?;

        while self.peek_keyword("AND") {
            self.pos += 1;
            expr = expr.and(self.primary()?);
        }

        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr> {
        if self.peek() == Some(&Token::Open) {
            self.pos += 1;
            let expr = self.or_expr()?;

            return match self.advance() {
                Some(Token::Close) => Ok(expr),
                _ => Err(self.error("unbalanced parentheses")),
            };
        }

        let variable = self.ident("a variable name")?;
        self.keyword("IS")?;
        let set = self.ident("a set name")?;
        let key = self
            .vars
            .find(variable)
            .ok_or_else(|| self.error(format!("unknown variable `{variable}`")))?;

        Ok(Expr::Is(key, self.vars.0[key].set_index(set)?))
    }
}

fn is_keyword(word: &str) -> bool {
    ["IF", "THEN", "IS", "AND", "OR"]
        .iter()
        .any(|keyword| word.eq_ignore_ascii_case(keyword))
}

/// Parses one `IF … THEN … IS …;` statement against the declared input
/// variables and the output vocabulary.
pub fn parse_rule<K: OutputTerm>(statement: &str, vars: &Variables, terms: &Terms<K>) -> Result<Rule<K>> {
    let mut parser = Parser {
        statement,
        tokens: tokenize(statement)?,
        pos: 0,
        vars,
    };

    parser.keyword("IF")?;
    let premise = parser.or_expr()?;
    parser.keyword("THEN")?;
    let variable = parser.ident("the output variable")?;
    parser.keyword("IS")?;
    let set = parser.ident("an output set")?;

    if parser.peek() == Some(&Token::Semi) {
        parser.pos += 1;
    }
    if parser.peek().is_some() {
        return Err(parser.error("unexpected input after the consequent"));
    }
    if variable != terms.variable() {
        return Err(parser.error(format!(
            "consequent must assign `{}`, not `{variable}`",
            terms.variable()
        )));
    }

    let consequence = K::from_name(set)
        .filter(|term| terms.get(*term).is_some())
        .ok_or_else(|| Error::UnknownSet {
            variable: variable.to_owned(),
            set: set.to_owned(),
        })?;

    Ok(Rule { premise, consequence })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartpole::{self, Force};

    fn setup() -> (Variables, cartpole::InputVariables, Terms<Force>) {
        let mut vars = Variables::new();
        let inputs = cartpole::register(&mut vars).unwrap();

        (vars, inputs, cartpole::force_terms())
    }

    #[test]
    fn test_rule_statements() {
        let source = "
            FUNCTION_BLOCK cartpole
            RULEBLOCK balance
                RULE 1 : IF cp IS stop THEN force IS stop;
              RULE 2: IF cv IS stop THEN force IS stop;
                RULEX 3: IF nonsense
            END_RULEBLOCK
        ";
        let statements: Vec<_> = rule_statements(source).collect::<Result<_>>().unwrap();

        assert_eq!(
            statements,
            ["IF cp IS stop THEN force IS stop;", "IF cv IS stop THEN force IS stop;"]
        );
        assert!(rule_statements("RULE 1 IF cp IS stop").next().unwrap().is_err());
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let (vars, inputs, terms) = setup();
        let rule = parse_rule(
            "IF pa IS up OR cp IS stop AND cv IS stop THEN force IS stop;",
            &vars,
            &terms,
        )
        .unwrap();
        let expected = vars
            .is(inputs.pa, "up")
            .unwrap()
            .or(vars.is(inputs.cp, "stop").unwrap().and(vars.is(inputs.cv, "stop").unwrap()));

        assert_eq!(rule.premise, expected);
        assert_eq!(rule.consequence, Force::Stop);
    }

    #[test]
    fn test_parentheses_and_case() {
        let (vars, inputs, terms) = setup();
        let rule = parse_rule(
            "if (pa IS up or cp IS stop) and cv is stop then force is left_fast",
            &vars,
            &terms,
        )
        .unwrap();
        let expected = vars
            .is(inputs.pa, "up")
            .unwrap()
            .or(vars.is(inputs.cp, "stop").unwrap())
            .and(vars.is(inputs.cv, "stop").unwrap());

        assert_eq!(rule.premise, expected);
        assert_eq!(rule.consequence, Force::LeftFast);
    }

    #[test]
    fn test_longer_set_names_are_not_shadowed_by_prefixes() {
        let (vars, inputs, terms) = setup();
        let rule = parse_rule("IF pa IS up_more_right THEN force IS right_fast;", &vars, &terms).unwrap();

        assert_eq!(rule.premise, vars.is(inputs.pa, "up_more_right").unwrap());
        assert_ne!(rule.premise, vars.is(inputs.pa, "up").unwrap());
    }

    #[test]
    fn test_malformed_rules() {
        let (vars, _, terms) = setup();
        let malformed = [
            "cp IS stop THEN force IS stop;",
            "IF cp IS stop force IS stop;",
            "IF cp stop THEN force IS stop;",
            "IF cp IS THEN force IS stop;",
            "IF (cp IS stop THEN force IS stop;",
            "IF cp IS stop AND THEN force IS stop;",
            "IF speed IS stop THEN force IS stop;",
            "IF cp IS stop THEN torque IS stop;",
            "IF cp IS stop THEN force IS stop; extra",
            "IF cp IS stop > 1 THEN force IS stop;",
        ];

        for statement in malformed {
            match parse_rule(statement, &vars, &terms) {
                Err(Error::RuleParse { .. }) => {},
                other => panic!("expected a parse error for `{statement}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_sets() {
        let (vars, _, terms) = setup();

        match parse_rule("IF cp IS sideways THEN force IS stop;", &vars, &terms) {
            Err(Error::UnknownSet { variable, set }) => {
                assert_eq!(variable, "cp");
                assert_eq!(set, "sideways");
            },
            other => panic!("expected an unknown set, got {other:?}"),
        }

        match parse_rule("IF cp IS stop THEN force IS very_fast;", &vars, &terms) {
            Err(Error::UnknownSet { variable, set }) => {
                assert_eq!(variable, "force");
                assert_eq!(set, "very_fast");
            },
            other => panic!("expected an unknown set, got {other:?}"),
        }
    }
}
