use thiserror::Error;

/// Semantic errors found while checking a statement against the schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("Value count mismatch: {columns} columns but {values} values")]
    ValueCountMismatch { columns: usize, values: usize },
    #[error("UPDATE requires at least one assignment")]
    EmptyAssignments,
}

/// Semantic analysis result
pub type SemanticResult<T> = Result<T, SemanticError>;
