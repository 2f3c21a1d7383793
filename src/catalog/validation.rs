// Semantic Validation Module
//
// This module checks a built statement against the schema. Validation is
// fail-fast and never rewrites the statement: on success the input comes back
// unchanged, so analysing an already-valid statement again is a no-op.

use log::{debug, warn};

use crate::catalog::schema::SchemaSource;
use crate::catalog::validation_error::{SemanticError, SemanticResult};
use crate::query::parser::ast::*;

/// The semantic analyzer validates statements against a borrowed schema
pub struct SemanticAnalyzer<'a, S: ?Sized> {
    schema: &'a S,
}

impl<'a, S: SchemaSource + ?Sized> SemanticAnalyzer<'a, S> {
    pub fn new(schema: &'a S) -> Self {
        SemanticAnalyzer { schema }
    }

    /// Validate a statement, returning it unchanged on success
    pub fn analyze(&self, stmt: Statement) -> SemanticResult<Statement> {
        self.check(&stmt)?;
        debug!("{} statement passed semantic analysis", stmt.query_type());
        Ok(stmt)
    }

    /// Run every rule for the statement's variant
    pub fn check(&self, stmt: &Statement) -> SemanticResult<()> {
        match stmt {
            Statement::Select(select) => {
                self.require_table(&select.table)?;
                if !select.is_wildcard() {
                    self.require_columns(&select.table, &select.columns)?;
                }
                self.check_conditions(&select.table, select.where_clause.as_ref())
            }
            Statement::Insert(insert) => {
                self.require_table(&insert.table)?;
                self.require_columns(&insert.table, &insert.columns)?;
                if insert.columns.len() != insert.values.len() {
                    return Err(SemanticError::ValueCountMismatch {
                        columns: insert.columns.len(),
                        values: insert.values.len(),
                    });
                }
                Ok(())
            }
            Statement::Update(update) => {
                self.require_table(&update.table)?;
                for assignment in &update.assignments {
                    self.require_column(&update.table, &assignment.column)?;
                }
                self.check_conditions(&update.table, update.where_clause.as_ref())?;
                if update.assignments.is_empty() {
                    return Err(SemanticError::EmptyAssignments);
                }
                Ok(())
            }
            Statement::Delete(delete) => {
                self.require_table(&delete.table)?;
                self.check_conditions(&delete.table, Some(&delete.where_clause))
            }
            Statement::DropTable(drop) => self.require_table(&drop.table),
            // Indexes are not modelled in the schema
            Statement::DropIndex(_) => Ok(()),
            // The table is being defined; duplicate definitions are the executor's concern
            Statement::CreateTable(_) | Statement::CreateIndex(_) => Ok(()),
        }
    }

    fn require_table(&self, table: &str) -> SemanticResult<()> {
        if self.schema.has_table(table) {
            Ok(())
        } else {
            Err(SemanticError::TableNotFound(table.to_string()))
        }
    }

    fn require_column(&self, table: &str, column: &str) -> SemanticResult<()> {
        if self.schema.has_column(table, column) {
            Ok(())
        } else {
            Err(SemanticError::ColumnNotFound(column.to_string()))
        }
    }

    fn require_columns(&self, table: &str, columns: &[String]) -> SemanticResult<()> {
        columns
            .iter()
            .try_for_each(|column| self.require_column(table, column))
    }

    /// Every condition must name a known column and a recognised operator
    fn check_conditions(&self, table: &str, chain: Option<&BooleanChain>) -> SemanticResult<()> {
        let Some(chain) = chain else {
            return Ok(());
        };
        for condition in chain {
            self.require_column(table, &condition.column)?;
            if condition.comparison().is_none() {
                return Err(SemanticError::InvalidOperator(condition.operator.clone()));
            }
        }
        if chain.len() > 1 && chain.iter().all(|c| c == &chain.conditions()[0]) {
            warn!("WHERE clause on {} repeats the same condition", table);
        }
        Ok(())
    }
}

/// Validate `stmt` against `schema`
pub fn analyze<S>(stmt: Statement, schema: &S) -> SemanticResult<Statement>
where
    S: SchemaSource + ?Sized,
{
    SemanticAnalyzer::new(schema).analyze(stmt)
}
