// Semantic Validation Integration Tests
//
// Statements built from SQL text, checked against an in-memory schema.

use anyhow::Result;
use sqlfront::catalog::{SemanticAnalyzer, SemanticError, analyze};
use sqlfront::query::parser::{build, tokenize};
use sqlfront::Statement;

#[path = "../common/mod.rs"]
mod common;

fn built(sql: &str) -> Result<Statement> {
    Ok(build(tokenize(sql)?)?)
}

#[test]
fn test_valid_statements_pass_unchanged() -> Result<()> {
    let schema = common::customers_schema()?;
    let queries = [
        "SELECT Name, City FROM Customers WHERE Country = 'Spain' OR Country = 'France'",
        "SELECT * FROM Orders",
        "INSERT INTO Products (ProductID, Title, Price) VALUES (1, 'Lamp', 9.5)",
        "UPDATE Orders SET Amount = 0 WHERE OrderID <= 10",
        "DELETE FROM Customers WHERE CustomerID != 3",
        "DROP TABLE Products",
    ];
    for sql in queries {
        let stmt = built(sql)?;
        assert_eq!(analyze(stmt.clone(), &schema)?, stmt, "analysing {}", sql);
    }
    Ok(())
}

#[test]
fn test_unknown_table_and_column() -> Result<()> {
    let schema = common::customers_schema()?;

    let err = analyze(built("SELECT Name FROM Suppliers")?, &schema).unwrap_err();
    assert_eq!(err, SemanticError::TableNotFound("Suppliers".to_string()));

    let err = analyze(built("SELECT Email FROM Customers")?, &schema).unwrap_err();
    assert_eq!(err, SemanticError::ColumnNotFound("Email".to_string()));

    // Column exists, but in another table
    let err = analyze(built("DELETE FROM Customers WHERE Amount > 5")?, &schema).unwrap_err();
    assert_eq!(err, SemanticError::ColumnNotFound("Amount".to_string()));

    Ok(())
}

#[test]
fn test_names_are_case_sensitive() -> Result<()> {
    let schema = common::customers_schema()?;
    let err = analyze(built("SELECT name FROM Customers")?, &schema).unwrap_err();
    assert_eq!(err, SemanticError::ColumnNotFound("name".to_string()));

    let err = analyze(built("DROP TABLE customers")?, &schema).unwrap_err();
    assert_eq!(err, SemanticError::TableNotFound("customers".to_string()));
    Ok(())
}

#[test]
fn test_unsupported_operator() -> Result<()> {
    let schema = common::customers_schema()?;
    let err = analyze(built("SELECT Name FROM Customers WHERE Name LIKE 'A%'")?, &schema).unwrap_err();
    assert_eq!(err, SemanticError::InvalidOperator("LIKE".to_string()));
    Ok(())
}

#[test]
fn test_ddl_statements_against_schema() -> Result<()> {
    let schema = common::customers_schema()?;
    let analyzer = SemanticAnalyzer::new(&schema);

    assert!(analyzer.check(&built("CREATE TABLE Suppliers (Id, Name)")?).is_ok());
    assert!(analyzer.check(&built("CREATE INDEX idx ON Suppliers (Id)")?).is_ok());
    assert!(analyzer.check(&built("DROP INDEX idx")?).is_ok());
    assert_eq!(
        analyzer.check(&built("DROP TABLE Suppliers")?),
        Err(SemanticError::TableNotFound("Suppliers".to_string()))
    );
    Ok(())
}
