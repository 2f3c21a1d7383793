// Command-Line Interface Tests
//
// Runs the sqlfront binary against a temporary schema file.

use std::process::{Command, Output};

use anyhow::Result;
use tempfile::NamedTempFile;

#[path = "../common/mod.rs"]
mod common;

fn run(schema: &NamedTempFile, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_sqlfront"))
        .arg("--schema")
        .arg(schema.path())
        .args(args)
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_query_command() -> Result<()> {
    let schema = common::write_schema_file(common::CUSTOMERS_JSON)?;
    let output = run(
        &schema,
        &["query", "select Name from Customers where Country = 'Peru'"],
    )?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "SELECT Name FROM Customers WHERE Country = 'Peru';"
    );
    Ok(())
}

#[test]
fn test_query_command_reports_errors() -> Result<()> {
    let schema = common::write_schema_file(common::CUSTOMERS_JSON)?;
    let output = run(&schema, &["query", "SELECT * FROM Ghost"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Table not found: Ghost"), "stderr: {}", stderr);
    assert!(stderr.contains("stage: semantic"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let schema = common::write_schema_file(common::CUSTOMERS_JSON)?;
    let output = run(
        &schema,
        &["--json", "query", "DELETE FROM Orders WHERE OrderID = 4"],
    )?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["kind"], "delete");
    assert_eq!(value["table"], "Orders");
    Ok(())
}

#[test]
fn test_tokens_command_skips_schema() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_sqlfront"))
        .args(["--schema", "does-not-exist.json", "tokens", "DROP TABLE Customers"])
        .output()?;

    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["Keyword(DROP)", "Keyword(TABLE)", "Table(Customers)"]);
    Ok(())
}

#[test]
fn test_tables_command() -> Result<()> {
    let schema = common::write_schema_file(common::CUSTOMERS_JSON)?;
    let output = run(&schema, &["tables"])?;

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Customers (CustomerID, Name, Country TEXT)"));
    assert!(text.contains("Orders (OrderID, CustomerID)"));
    Ok(())
}
