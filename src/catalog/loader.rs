// Schema Loader
//
// Loads table/column metadata from a JSON document. This runs before any
// parsing; the resulting Schema is then lent read-only to the front end.
//
// {"tables": [{"name": "Customers", "columns": ["Id", {"name": "Country", "type": "TEXT"}]}]}

use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use super::column::Column;
use super::schema::{Schema, SchemaError};
use super::table::Table;

/// Default schema file name used by the command-line driver
pub const DEFAULT_SCHEMA_FILE: &str = "schema.json";

/// Errors raised while loading a schema document
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    #[error("Failed to read schema file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDocument {
    #[serde(default)]
    tables: Vec<TableDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableDocument {
    name: String,
    #[serde(default)]
    columns: Vec<ColumnDocument>,
}

/// A column is either a bare name or a `{name, type}` object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColumnDocument {
    Name(String),
    Full(Column),
}

impl From<ColumnDocument> for Column {
    fn from(doc: ColumnDocument) -> Self {
        match doc {
            ColumnDocument::Name(name) => Column::new(name),
            ColumnDocument::Full(column) => column,
        }
    }
}

/// Builds a Schema from a JSON source
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load a schema from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Schema, SchemaLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let schema = Self::from_json_str(&text)?;
        info!("loaded {} table(s) from {}", schema.len(), path.display());
        Ok(schema)
    }

    /// Load a schema from a JSON string
    pub fn from_json_str(text: &str) -> Result<Schema, SchemaLoadError> {
        let document: SchemaDocument = serde_json::from_str(text)?;

        let mut schema = Schema::new();
        for table in document.tables {
            let columns = table.columns.into_iter().map(Column::from).collect();
            schema.add_table(Table::new(table.name, columns)?)?;
        }
        Ok(schema)
    }
}
