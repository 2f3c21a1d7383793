// Statement Builder Implementation
//
// This module assembles the lexer's flat token stream into one Statement
// variant. It is a purely structural step: no schema lookups happen here.

use std::iter::Peekable;
use std::vec::IntoIter;

use log::debug;
use thiserror::Error;

use super::ast::*;
use super::conditions::{ConditionError, parse_conditions};
use super::lexer::{Token, TokenKind};

/// Errors raised while assembling a statement from tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Arity mismatch: {columns} columns but {values} values")]
    ArityMismatch { columns: usize, values: usize },
    /// The token stream does not match the shape its leading keyword announces.
    /// With tokens from the lexer this signals a bug, not bad input.
    #[error("Internal dispatch mismatch: {0}")]
    DispatchMismatch(String),
    #[error("Expected {expected}, found {found}")]
    Expected { expected: String, found: String },
    #[error("Unexpected trailing token: {0}")]
    TrailingToken(String),
    #[error(transparent)]
    Condition(#[from] ConditionError),
}

/// Result type for building operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Builds a Statement from a token sequence
pub struct StatementBuilder {
    tokens: Peekable<IntoIter<Token>>,
}

impl StatementBuilder {
    pub fn new(tokens: Vec<Token>) -> Self {
        StatementBuilder {
            tokens: tokens.into_iter().peekable(),
        }
    }

    /// Build the statement announced by the leading keyword token
    pub fn build(mut self) -> BuildResult<Statement> {
        let leading = self.tokens.next().ok_or_else(|| {
            BuildError::DispatchMismatch("empty token stream".to_string())
        })?;

        // Re-derive the query type rather than trusting the lexer's dispatch
        let query_type = match leading.kind {
            TokenKind::Keyword => QueryType::from_keyword(&leading.text),
            _ => None,
        }
        .ok_or_else(|| {
            BuildError::DispatchMismatch(format!("{} does not start a statement", leading))
        })?;

        let statement = match query_type {
            QueryType::Select => self.build_select()?,
            QueryType::Insert => self.build_insert()?,
            QueryType::Update => self.build_update()?,
            QueryType::Delete => self.build_delete()?,
            QueryType::Drop => self.build_drop()?,
            QueryType::Create => self.build_create()?,
        };

        if let Some(extra) = self.tokens.next() {
            return Err(BuildError::TrailingToken(extra.to_string()));
        }
        debug!("built {} statement", statement.query_type());
        Ok(statement)
    }

    /// Check if the next token has the given kind
    fn peek_is(&mut self, kind: TokenKind) -> bool {
        self.tokens.peek().is_some_and(|t| t.kind == kind)
    }

    /// Check if the next token is the given keyword
    fn peek_keyword(&mut self, keyword: &str) -> bool {
        self.tokens.peek().is_some_and(|t| t.is_keyword(keyword))
    }

    /// Consume the next token, requiring it to have `kind`
    fn expect_kind(&mut self, kind: TokenKind) -> BuildResult<String> {
        match self.tokens.next() {
            Some(token) if token.kind == kind => Ok(token.text),
            other => Err(expected(format!("{:?}", kind), other)),
        }
    }

    /// Consume the next token, requiring it to be `keyword`
    fn expect_keyword(&mut self, keyword: &str) -> BuildResult<()> {
        match self.tokens.next() {
            Some(token) if token.is_keyword(keyword) => Ok(()),
            other => Err(expected(format!("keyword {}", keyword), other)),
        }
    }

    /// Collect every consecutive token of `kind`
    fn collect_kind(&mut self, kind: TokenKind) -> Vec<String> {
        let mut texts = Vec::new();
        while self.peek_is(kind) {
            if let Some(token) = self.tokens.next() {
                texts.push(token.text);
            }
        }
        texts
    }

    /// Collect a non-empty run of `kind` tokens
    fn expect_list(&mut self, kind: TokenKind) -> BuildResult<Vec<String>> {
        let texts = self.collect_kind(kind);
        if texts.is_empty() {
            let next = self.tokens.next();
            return Err(expected(format!("at least one {:?}", kind), next));
        }
        Ok(texts)
    }

    /// Parse an optional `WHERE <condition>` tail
    fn optional_where(&mut self) -> BuildResult<Option<BooleanChain>> {
        if !self.peek_keyword("WHERE") {
            return Ok(None);
        }
        self.expect_keyword("WHERE")?;
        let body = self.expect_kind(TokenKind::Condition)?;
        Ok(Some(parse_conditions(&body)?))
    }

    fn build_select(&mut self) -> BuildResult<Statement> {
        let columns = self.expect_list(TokenKind::Column)?;
        self.expect_keyword("FROM")?;
        let table = self.expect_kind(TokenKind::Table)?;
        let where_clause = self.optional_where()?;

        Ok(Statement::Select(SelectStatement {
            table,
            columns,
            where_clause,
        }))
    }

    fn build_insert(&mut self) -> BuildResult<Statement> {
        self.expect_keyword("INTO")?;
        let table = self.expect_kind(TokenKind::Table)?;
        let columns = self.expect_list(TokenKind::Column)?;
        self.expect_keyword("VALUES")?;
        let values = self.expect_list(TokenKind::Value)?;

        if columns.len() != values.len() {
            return Err(BuildError::ArityMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }

        Ok(Statement::Insert(InsertStatement {
            table,
            columns,
            values,
        }))
    }

    fn build_update(&mut self) -> BuildResult<Statement> {
        let table = self.expect_kind(TokenKind::Table)?;
        self.expect_keyword("SET")?;

        // Columns and values are counted separately so a lost half of a pair
        // surfaces as an arity error instead of a shifted assignment.
        let mut columns = Vec::new();
        let mut values = Vec::new();
        loop {
            match self.tokens.peek().map(|t| t.kind) {
                Some(TokenKind::Column) => columns.push(self.expect_kind(TokenKind::Column)?),
                Some(TokenKind::Operator) => {
                    let op = self.expect_kind(TokenKind::Operator)?;
                    if op != "=" {
                        return Err(BuildError::Expected {
                            expected: "assignment operator =".to_string(),
                            found: op,
                        });
                    }
                }
                Some(TokenKind::Value) => values.push(self.expect_kind(TokenKind::Value)?),
                _ => break,
            }
        }

        if columns.len() != values.len() {
            return Err(BuildError::ArityMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }
        let assignments = columns
            .into_iter()
            .zip(values)
            .map(|(column, value)| Assignment { column, value })
            .collect();

        let where_clause = self.optional_where()?;

        Ok(Statement::Update(UpdateStatement {
            table,
            assignments,
            where_clause,
        }))
    }

    fn build_delete(&mut self) -> BuildResult<Statement> {
        self.expect_keyword("FROM")?;
        let table = self.expect_kind(TokenKind::Table)?;
        self.expect_keyword("WHERE")?;
        let body = self.expect_kind(TokenKind::Condition)?;
        let where_clause = parse_conditions(&body)?;

        Ok(Statement::Delete(DeleteStatement {
            table,
            where_clause,
        }))
    }

    fn build_drop(&mut self) -> BuildResult<Statement> {
        if self.peek_keyword("TABLE") {
            self.expect_keyword("TABLE")?;
            let table = self.expect_kind(TokenKind::Table)?;
            Ok(Statement::DropTable(DropTableStatement { table }))
        } else if self.peek_keyword("INDEX") {
            self.expect_keyword("INDEX")?;
            let index = self.expect_kind(TokenKind::Index)?;
            Ok(Statement::DropIndex(DropIndexStatement { index }))
        } else {
            Err(self.target_mismatch(QueryType::Drop))
        }
    }

    fn build_create(&mut self) -> BuildResult<Statement> {
        if self.peek_keyword("TABLE") {
            self.expect_keyword("TABLE")?;
            let table = self.expect_kind(TokenKind::Table)?;
            let columns = self.expect_list(TokenKind::Column)?;
            Ok(Statement::CreateTable(CreateTableStatement { table, columns }))
        } else if self.peek_keyword("INDEX") {
            self.expect_keyword("INDEX")?;
            let index = self.expect_kind(TokenKind::Index)?;
            self.expect_keyword("ON")?;
            let table = self.expect_kind(TokenKind::Table)?;
            let columns = self.expect_list(TokenKind::Column)?;
            Ok(Statement::CreateIndex(CreateIndexStatement {
                index,
                table,
                columns,
            }))
        } else {
            Err(self.target_mismatch(QueryType::Create))
        }
    }

    fn target_mismatch(&mut self, query_type: QueryType) -> BuildError {
        let found = self
            .tokens
            .peek()
            .map_or_else(|| "end of input".to_string(), |t| t.to_string());
        BuildError::DispatchMismatch(format!("{} expects TABLE or INDEX, found {}", query_type, found))
    }
}

fn expected(expected: String, found: Option<Token>) -> BuildError {
    BuildError::Expected {
        expected,
        found: found.map_or_else(|| "end of input".to_string(), |t| t.to_string()),
    }
}

/// Build a statement from a token sequence
pub fn build(tokens: Vec<Token>) -> BuildResult<Statement> {
    StatementBuilder::new(tokens).build()
}
