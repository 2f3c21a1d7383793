#![allow(dead_code)]

use std::io::Write;

use anyhow::Result;
use sqlfront::catalog::{Column, Schema, Table};
use tempfile::NamedTempFile;

// Schema shared by most integration tests
pub fn customers_schema() -> Result<Schema> {
    let mut schema = Schema::new()
        .with_table("Customers", &["CustomerID", "Name", "Country", "City"])?
        .with_table("Orders", &["OrderID", "CustomerID", "Amount"])?;
    schema.add_table(Table::new(
        "Products",
        vec![
            Column::typed("ProductID", "INTEGER"),
            Column::typed("Title", "TEXT"),
            Column::typed("Price", "FLOAT"),
        ],
    )?)?;
    Ok(schema)
}

// Write a schema document to a temporary file
pub fn write_schema_file(json: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub const CUSTOMERS_JSON: &str = r#"{
    "tables": [
        {"name": "Customers", "columns": ["CustomerID", "Name", {"name": "Country", "type": "TEXT"}]},
        {"name": "Orders", "columns": ["OrderID", "CustomerID"]}
    ]
}"#;
