// WHERE Clause Condition Parser
//
// Turns the raw body of a WHERE clause into a BooleanChain. The grammar is a
// flat list of `column operator value` triples joined by a single connective:
// either every join is AND or every join is OR. Grouping is not supported.

use log::trace;
use thiserror::Error;

use super::ast::{BooleanChain, BooleanOp, Condition};
use super::components::lexer_core::{split_words, trim_identifier};

/// Errors specific to WHERE clauses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Empty WHERE clause")]
    Empty,
    #[error("WHERE clause mixes AND and OR; only one connective is allowed")]
    MixedOperators,
    #[error("Malformed condition: '{0}' (expected <column> <operator> <value>)")]
    Malformed(String),
}

/// Result type for condition parsing
pub type ConditionResult<T> = Result<T, ConditionError>;

/// Parse a WHERE body such as `a = 1 AND b > 2`
pub fn parse_conditions(where_body: &str) -> ConditionResult<BooleanChain> {
    let words = split_words(where_body);
    if words.is_empty() {
        return Err(ConditionError::Empty);
    }

    let has_and = words.iter().any(|w| w.eq_ignore_ascii_case("AND"));
    let has_or = words.iter().any(|w| w.eq_ignore_ascii_case("OR"));
    let op = match (has_and, has_or) {
        (true, true) => return Err(ConditionError::MixedOperators),
        (false, true) => BooleanOp::Or,
        _ => BooleanOp::And,
    };

    // Split the word list on the connective; each fragment must be a triple
    let conditions = words
        .split(|w| w.eq_ignore_ascii_case(op.as_str()))
        .map(parse_condition)
        .collect::<ConditionResult<Vec<_>>>()?;
    trace!("parsed {} condition(s) joined by {}", conditions.len(), op.as_str());

    BooleanChain::new(op, conditions).ok_or(ConditionError::Empty)
}

fn parse_condition(fragment: &[&str]) -> ConditionResult<Condition> {
    match fragment {
        [column, operator, value] if !trim_identifier(column).is_empty() => {
            Ok(Condition::new(trim_identifier(column), *operator, *value))
        }
        _ => Err(ConditionError::Malformed(fragment.join(" "))),
    }
}
