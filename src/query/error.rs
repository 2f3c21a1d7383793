// Query Front-End Errors
//
// One error type covering every stage of the pipeline, tagged by stage.

use thiserror::Error;

use crate::catalog::SemanticError;
use super::parser::{BuildError, ConditionError, LexError};

/// Error returned by `parse_sql`: the first failure of whichever stage hit it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("WHERE clause error: {0}")]
    Condition(#[from] ConditionError),
    #[error("Build error: {0}")]
    Build(BuildError),
    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl ParseError {
    /// Name of the pipeline stage that produced the error
    pub fn stage(&self) -> &'static str {
        match self {
            ParseError::Lex(_) => "lexer",
            ParseError::Condition(_) => "conditions",
            ParseError::Build(_) => "builder",
            ParseError::Semantic(_) => "semantic",
        }
    }
}

// Condition errors raised while building surface as their own stage
impl From<BuildError> for ParseError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Condition(inner) => ParseError::Condition(inner),
            other => ParseError::Build(other),
        }
    }
}

/// Result type for the whole pipeline
pub type ParseResult<T> = Result<T, ParseError>;
