// Schema Loading Integration Tests
//
// JSON schema files on disk, loaded through SchemaLoader.

use anyhow::Result;
use sqlfront::catalog::{SchemaError, SchemaLoadError, SchemaLoader, SchemaSource};
use sqlfront::parse_sql;

#[path = "../common/mod.rs"]
mod common;

#[test]
fn test_load_schema_file() -> Result<()> {
    let file = common::write_schema_file(common::CUSTOMERS_JSON)?;
    let schema = SchemaLoader::from_path(file.path())?;

    assert_eq!(schema.len(), 2);
    assert_eq!(
        schema.table_names().into_iter().collect::<Vec<_>>(),
        vec!["Customers", "Orders"]
    );
    assert_eq!(schema.table_columns("Customers"), vec!["CustomerID", "Name", "Country"]);
    assert_eq!(schema.column_data_type("Customers", "Country"), Some("TEXT"));
    assert!(schema.table_columns("Ghost").is_empty());

    // The loaded schema drives the front end
    assert!(parse_sql("SELECT Name FROM Customers WHERE Country = 'NZ'", &schema).is_ok());
    Ok(())
}

#[test]
fn test_table_order_preserved() -> Result<()> {
    let file = common::write_schema_file(
        r#"{"tables": [{"name": "Zeta", "columns": ["z"]}, {"name": "Alpha", "columns": ["a"]}]}"#,
    )?;
    let schema = SchemaLoader::from_path(file.path())?;
    let names: Vec<&str> = schema.tables().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = SchemaLoader::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SchemaLoadError::Io(_)));
    Ok(())
}

#[test]
fn test_malformed_documents() -> Result<()> {
    let file = common::write_schema_file("{ not json")?;
    assert!(matches!(
        SchemaLoader::from_path(file.path()),
        Err(SchemaLoadError::Json(_))
    ));

    let file = common::write_schema_file(r#"{"tables": [], "views": []}"#)?;
    assert!(matches!(
        SchemaLoader::from_path(file.path()),
        Err(SchemaLoadError::Json(_))
    ));
    Ok(())
}

#[test]
fn test_duplicate_definitions() -> Result<()> {
    let file = common::write_schema_file(
        r#"{"tables": [{"name": "Orders", "columns": ["Id", "Total", "Id"]}]}"#,
    )?;
    match SchemaLoader::from_path(file.path()) {
        Err(SchemaLoadError::Schema(SchemaError::DuplicateColumn { table, column })) => {
            assert_eq!(table, "Orders");
            assert_eq!(column, "Id");
        }
        other => panic!("Expected duplicate column error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_empty_schema() -> Result<()> {
    let file = common::write_schema_file("{}")?;
    let schema = SchemaLoader::from_path(file.path())?;
    assert!(schema.is_empty());
    assert!(schema.table_names().is_empty());
    Ok(())
}
