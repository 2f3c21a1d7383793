// SQL Lexer Implementation
//
// This module turns a raw SQL string into a flat, ordered sequence of typed
// tokens. It normalises keyword casing, dispatches on the leading keyword and
// hands the remainder to a per-shape clause extractor.

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use super::ast::QueryType;
use super::components::lexer_core::{count_unquoted, normalize};
use super::components::{
    extract_create, extract_delete, extract_drop, extract_insert, extract_select, extract_update,
};

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Table,
    Column,
    Value,
    /// Raw body of a WHERE clause, parsed later by the condition sub-parser
    Condition,
    Operator,
    Index,
}

/// A Token represents one classified fragment of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Keyword, text)
    }

    /// Check if this token is the given keyword
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text)
    }
}

/// Errors raised while decomposing the input into clauses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unknown query type: '{0}'")]
    UnknownQueryType(String),
    #[error("Missing clause: {0}")]
    MissingClause(&'static str),
    #[error("Invalid identifier for {0}")]
    InvalidIdentifier(&'static str),
    #[error("Malformed assignment: '{0}'")]
    MalformedAssignment(String),
    #[error("Arity mismatch: {columns} columns but {values} values")]
    ArityMismatch { columns: usize, values: usize },
    #[error("Invalid DROP target: '{0}' (expected TABLE <name> or INDEX <name>)")]
    InvalidDropTarget(String),
    #[error("Invalid CREATE target: '{0}' (expected TABLE or INDEX)")]
    InvalidCreateTarget(String),
    #[error("Unterminated string literal")]
    UnterminatedLiteral,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Only one statement can be parsed at a time")]
    MultipleStatements,
    #[error("Unexpected text: '{0}'")]
    UnexpectedText(String),
}

/// Result type for lexing operations
pub type LexResult<T> = Result<T, LexError>;

/// SQL Lexer for breaking a query string into tokens
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from a SQL query string
    pub fn new(input: &'a str) -> Self {
        Lexer { input }
    }

    /// Tokenize the whole statement
    pub fn tokenize(&self) -> LexResult<Vec<Token>> {
        let normalized = normalize(self.input)?;
        let body = strip_terminator(&normalized)?;

        let word_len = body
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(body.len());
        let (word, rest) = body.split_at(word_len);

        let query_type =
            QueryType::from_keyword(word).ok_or_else(|| LexError::UnknownQueryType(word.to_string()))?;
        trace!("dispatching {} extractor on '{}'", query_type, rest);

        let mut tokens = vec![Token::keyword(query_type.as_str())];
        let clauses = match query_type {
            QueryType::Select => extract_select(rest)?,
            QueryType::Insert => extract_insert(rest)?,
            QueryType::Update => extract_update(rest)?,
            QueryType::Delete => extract_delete(rest)?,
            QueryType::Drop => extract_drop(rest)?,
            QueryType::Create => extract_create(rest)?,
        };
        tokens.extend(clauses);

        debug!("tokenized {} statement into {} tokens", query_type, tokens.len());
        Ok(tokens)
    }
}

/// Tokenize a SQL string
pub fn tokenize(sql: &str) -> LexResult<Vec<Token>> {
    Lexer::new(sql).tokenize()
}

/// Drop trailing `;` terminators and reject any other statement separator
fn strip_terminator(sql: &str) -> LexResult<&str> {
    let body = sql.trim_end_matches(|c: char| c == ';' || c.is_whitespace());
    if count_unquoted(body, ';') > 0 {
        return Err(LexError::MultipleStatements);
    }
    Ok(body)
}
