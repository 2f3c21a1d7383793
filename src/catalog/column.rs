// Column Metadata
//
// This module defines the Column type describing one column of a table.

use serde::{Deserialize, Serialize};

/// Represents a column in a database table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    name: String,
    /// Declared data type, kept as written (e.g. "varchar(255)")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    data_type: Option<String>,
}

impl Column {
    /// Create an untyped column
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            data_type: None,
        }
    }

    /// Create a column with a declared data type
    pub fn typed(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            data_type: Some(data_type.into()),
        }
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared data type, if any
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }
}
