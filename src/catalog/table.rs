//! Table Metadata
//!
//! This module defines the Table type: a name plus an ordered column list.

use std::collections::HashMap;

use super::column::Column;
use super::schema::SchemaError;

/// Represents a table's column layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name
    name: String,
    /// Columns in declaration order
    columns: Vec<Column>,
    /// Column name to position lookup
    column_map: HashMap<String, usize>,
}

impl Table {
    /// Create a new table, rejecting duplicate column names
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Result<Self, SchemaError> {
        let name = name.into();
        let mut column_map = HashMap::with_capacity(columns.len());

        for (i, col) in columns.iter().enumerate() {
            if column_map.insert(col.name().to_string(), i).is_some() {
                return Err(SchemaError::DuplicateColumn {
                    table: name,
                    column: col.name().to_string(),
                });
            }
        }

        Ok(Table {
            name,
            columns,
            column_map,
        })
    }

    /// Get the table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.column_map.get(name).map(|&i| &self.columns[i])
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_map.contains_key(name)
    }
}
