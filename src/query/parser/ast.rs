// SQL Abstract Syntax Tree (AST) Implementation
//
// This module defines the statement representation produced by the builder.
// Every node is a plain value: no references back into tokens or the schema.

use std::fmt;

use serde::Serialize;

/// The six query shapes recognised by the lexer's leading keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
    Drop,
    Create,
}

impl QueryType {
    /// Match a leading keyword case-insensitively
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "SELECT" => Some(QueryType::Select),
            "INSERT" => Some(QueryType::Insert),
            "UPDATE" => Some(QueryType::Update),
            "DELETE" => Some(QueryType::Delete),
            "DROP" => Some(QueryType::Drop),
            "CREATE" => Some(QueryType::Create),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Select => "SELECT",
            QueryType::Insert => "INSERT",
            QueryType::Update => "UPDATE",
            QueryType::Delete => "DELETE",
            QueryType::Drop => "DROP",
            QueryType::Create => "CREATE",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a validated-shape SQL statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    DropTable(DropTableStatement),
    DropIndex(DropIndexStatement),
    CreateTable(CreateTableStatement),
    CreateIndex(CreateIndexStatement),
}

/// SELECT statement representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectStatement {
    pub table: String,
    /// Projection list in source order; `["*"]` for a wildcard
    pub columns: Vec<String>,
    pub where_clause: Option<BooleanChain>,
}

impl SelectStatement {
    /// Check whether the projection is the bare wildcard
    pub fn is_wildcard(&self) -> bool {
        self.columns.len() == 1 && self.columns[0] == "*"
    }
}

/// INSERT statement; `columns` and `values` correspond by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

/// UPDATE statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateStatement {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<BooleanChain>,
}

/// Column assignment in UPDATE
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// DELETE statement. The WHERE clause is mandatory in this grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteStatement {
    pub table: String,
    pub where_clause: BooleanChain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropTableStatement {
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropIndexStatement {
    pub index: String,
}

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTableStatement {
    pub table: String,
    pub columns: Vec<String>,
}

/// CREATE INDEX statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIndexStatement {
    pub index: String,
    pub table: String,
    pub columns: Vec<String>,
}

impl Statement {
    /// The query shape this statement was built from
    pub fn query_type(&self) -> QueryType {
        match self {
            Statement::Select(_) => QueryType::Select,
            Statement::Insert(_) => QueryType::Insert,
            Statement::Update(_) => QueryType::Update,
            Statement::Delete(_) => QueryType::Delete,
            Statement::DropTable(_) | Statement::DropIndex(_) => QueryType::Drop,
            Statement::CreateTable(_) | Statement::CreateIndex(_) => QueryType::Create,
        }
    }

    /// The table this statement targets, if it names one
    pub fn table(&self) -> Option<&str> {
        match self {
            Statement::Select(s) => Some(&s.table),
            Statement::Insert(s) => Some(&s.table),
            Statement::Update(s) => Some(&s.table),
            Statement::Delete(s) => Some(&s.table),
            Statement::DropTable(s) => Some(&s.table),
            Statement::DropIndex(_) => None,
            Statement::CreateTable(s) => Some(&s.table),
            Statement::CreateIndex(s) => Some(&s.table),
        }
    }

    /// The WHERE chain, for the variants that can carry one
    pub fn where_clause(&self) -> Option<&BooleanChain> {
        match self {
            Statement::Select(s) => s.where_clause.as_ref(),
            Statement::Update(s) => s.where_clause.as_ref(),
            Statement::Delete(s) => Some(&s.where_clause),
            _ => None,
        }
    }
}

/// Comparison operators accepted in a WHERE condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOp {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessEquals,
    GreaterEquals,
}

impl ComparisonOp {
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "=" => Some(ComparisonOp::Equals),
            "!=" => Some(ComparisonOp::NotEquals),
            "<" => Some(ComparisonOp::LessThan),
            ">" => Some(ComparisonOp::GreaterThan),
            "<=" => Some(ComparisonOp::LessEquals),
            ">=" => Some(ComparisonOp::GreaterEquals),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Equals => "=",
            ComparisonOp::NotEquals => "!=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::LessEquals => "<=",
            ComparisonOp::GreaterEquals => ">=",
        }
    }
}

/// A single `column operator value` comparison.
///
/// The operator is kept as written; whether it is one of the recognised
/// comparison operators is decided during semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub column: String,
    pub operator: String,
    pub value: String,
}

impl Condition {
    pub fn new(column: impl Into<String>, operator: impl Into<String>, value: impl Into<String>) -> Self {
        Condition {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// The recognised comparison operator, if the written one is valid
    pub fn comparison(&self) -> Option<ComparisonOp> {
        ComparisonOp::parse(&self.operator)
    }
}

/// Boolean connective applied between adjacent conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BooleanOp {
    And,
    Or,
}

impl BooleanOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOp::And => "AND",
            BooleanOp::Or => "OR",
        }
    }
}

/// Non-empty, ordered list of conditions joined by one uniform operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanChain {
    op: BooleanOp,
    conditions: Vec<Condition>,
}

impl BooleanChain {
    /// A chain holding one condition. Its operator is recorded as AND.
    pub fn single(condition: Condition) -> Self {
        BooleanChain {
            op: BooleanOp::And,
            conditions: vec![condition],
        }
    }

    /// Build a chain, returning None when `conditions` is empty
    pub fn new(op: BooleanOp, conditions: Vec<Condition>) -> Option<Self> {
        if conditions.is_empty() {
            return None;
        }
        Some(BooleanChain { op, conditions })
    }

    pub fn op(&self) -> BooleanOp {
        self.op
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// A chain holds at least one condition, so this is false
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }
}

impl<'a> IntoIterator for &'a BooleanChain {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.operator, self.value)
    }
}

impl fmt::Display for BooleanChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = format!(" {} ", self.op.as_str());
        let parts: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join(&joiner))
    }
}

// Canonical SQL rendering: keywords uppercase, names and literals as written.
// Re-parsing the output yields an equal statement.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(s) => {
                write!(f, "SELECT {} FROM {}", s.columns.join(", "), s.table)?;
                if let Some(chain) = &s.where_clause {
                    write!(f, " WHERE {}", chain)?;
                }
            }
            Statement::Insert(s) => write!(
                f,
                "INSERT INTO {} ({}) VALUES ({})",
                s.table,
                s.columns.join(", "),
                s.values.join(", ")
            )?,
            Statement::Update(s) => {
                let sets: Vec<String> = s
                    .assignments
                    .iter()
                    .map(|a| format!("{} = {}", a.column, a.value))
                    .collect();
                write!(f, "UPDATE {} SET {}", s.table, sets.join(", "))?;
                if let Some(chain) = &s.where_clause {
                    write!(f, " WHERE {}", chain)?;
                }
            }
            Statement::Delete(s) => write!(f, "DELETE FROM {} WHERE {}", s.table, s.where_clause)?,
            Statement::DropTable(s) => write!(f, "DROP TABLE {}", s.table)?,
            Statement::DropIndex(s) => write!(f, "DROP INDEX {}", s.index)?,
            Statement::CreateTable(s) => {
                write!(f, "CREATE TABLE {} ({})", s.table, s.columns.join(", "))?
            }
            Statement::CreateIndex(s) => write!(
                f,
                "CREATE INDEX {} ON {} ({})",
                s.index,
                s.table,
                s.columns.join(", ")
            )?,
        }
        f.write_str(";")
    }
}
