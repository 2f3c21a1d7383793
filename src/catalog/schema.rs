// Schema Metadata
//
// This module defines the read-only lookup interface the front end consumes
// (SchemaSource) and an in-memory Schema implementing it.

use std::collections::BTreeSet;

use linked_hash_map::LinkedHashMap;
use thiserror::Error;

use super::column::Column;
use super::table::Table;

/// Errors raised while assembling a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Table {0} is defined more than once")]
    DuplicateTable(String),
    #[error("Column {column} is defined more than once in table {table}")]
    DuplicateColumn { table: String, column: String },
}

/// Read-only table/column metadata used for semantic analysis.
///
/// Implementations must not change while a parse borrows them.
pub trait SchemaSource {
    /// Names of all known tables
    fn table_names(&self) -> BTreeSet<&str>;

    /// Columns of `table` in declaration order; empty when the table is unknown
    fn table_columns(&self, table: &str) -> Vec<&str>;

    /// Declared data type of a column. Not consulted by current validation rules.
    fn column_data_type(&self, table: &str, column: &str) -> Option<&str>;

    /// Check if a table exists
    fn has_table(&self, table: &str) -> bool {
        self.table_names().contains(table)
    }

    /// Check if a table has the given column
    fn has_column(&self, table: &str, column: &str) -> bool {
        self.table_columns(table).contains(&column)
    }
}

/// In-memory schema keeping tables in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tables: LinkedHashMap<String, Table>,
}

impl Schema {
    /// Create a new, empty schema
    pub fn new() -> Self {
        Schema::default()
    }

    /// Builder-style helper adding an untyped table
    pub fn with_table(mut self, name: &str, columns: &[&str]) -> Result<Self, SchemaError> {
        let columns = columns.iter().map(|c| Column::new(*c)).collect();
        self.add_table(Table::new(name, columns)?)?;
        Ok(self)
    }

    /// Add a table to the schema
    pub fn add_table(&mut self, table: Table) -> Result<(), SchemaError> {
        if self.tables.contains_key(table.name()) {
            return Err(SchemaError::DuplicateTable(table.name().to_string()));
        }
        self.tables.insert(table.name().to_string(), table);
        Ok(())
    }

    /// Get a table by name
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// All tables in declaration order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl SchemaSource for Schema {
    fn table_names(&self) -> BTreeSet<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    fn table_columns(&self, table: &str) -> Vec<&str> {
        self.tables
            .get(table)
            .map(|t| t.columns().iter().map(Column::name).collect())
            .unwrap_or_default()
    }

    fn column_data_type(&self, table: &str, column: &str) -> Option<&str> {
        self.tables.get(table)?.get_column(column)?.data_type()
    }

    fn has_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    fn has_column(&self, table: &str, column: &str) -> bool {
        self.tables.get(table).is_some_and(|t| t.has_column(column))
    }
}
