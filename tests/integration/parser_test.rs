// Parser Integration Tests
//
// Lexer and statement builder, without schema checks.

use anyhow::{Result, anyhow};
use sqlfront::query::parser::ast::*;
use sqlfront::query::parser::{BuildError, ConditionError, LexError, TokenKind, build, tokenize};

fn parse(sql: &str) -> Result<Statement> {
    let tokens = tokenize(sql).map_err(|e| anyhow!("Lex error: {}", e))?;
    build(tokens).map_err(|e| anyhow!("Build error: {}", e))
}

#[test]
fn test_simple_select_query() -> Result<()> {
    let statement = parse("SELECT id, name FROM test_table WHERE id > 5")?;

    if let Statement::Select(select) = statement {
        assert_eq!(select.columns, vec!["id", "name"]);
        assert_eq!(select.table, "test_table");

        let chain = select.where_clause.expect("Expected WHERE clause");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.conditions()[0].comparison(), Some(ComparisonOp::GreaterThan));
    } else {
        panic!("Expected SELECT statement");
    }

    Ok(())
}

#[test]
fn test_complex_select_query() -> Result<()> {
    let sql = "SELECT id, name, value FROM products WHERE price > 100 AND category = 'electronics'";
    let statement = parse(sql)?;

    if let Statement::Select(select) = statement {
        assert_eq!(select.columns.len(), 3);
        assert_eq!(select.table, "products");
        let chain = select.where_clause.expect("Expected WHERE clause");
        assert_eq!(chain.op(), BooleanOp::And);
        assert_eq!(chain.conditions()[1].value, "'electronics'");
    } else {
        panic!("Expected SELECT statement");
    }

    Ok(())
}

#[test]
fn test_create_table_statement() -> Result<()> {
    let statement = parse("CREATE TABLE Customers (CustomerID, CustomerName , Country );")?;
    assert_eq!(
        statement,
        Statement::CreateTable(CreateTableStatement {
            table: "Customers".to_string(),
            columns: vec![
                "CustomerID".to_string(),
                "CustomerName".to_string(),
                "Country".to_string()
            ],
        })
    );
    Ok(())
}

#[test]
fn test_create_index_lowercase_keywords() -> Result<()> {
    let statement = parse("create index index_name on Customers (CustomerID, CustomerName , Country );")?;
    if let Statement::CreateIndex(create) = statement {
        assert_eq!(create.index, "index_name");
        assert_eq!(create.table, "Customers");
        assert_eq!(create.columns.len(), 3);
    } else {
        panic!("Expected CREATE INDEX statement");
    }
    Ok(())
}

#[test]
fn test_drop_statements() -> Result<()> {
    assert_eq!(
        parse("DROP TABLE Customers;")?,
        Statement::DropTable(DropTableStatement {
            table: "Customers".to_string()
        })
    );
    assert_eq!(
        parse("DROP index Customers;")?,
        Statement::DropIndex(DropIndexStatement {
            index: "Customers".to_string()
        })
    );
    Ok(())
}

#[test]
fn test_literal_case_preserved() -> Result<()> {
    let statement = parse("insert into Customers (Name, City) values ('John Doe', 'from Where');")?;
    if let Statement::Insert(insert) = statement {
        assert_eq!(insert.values, vec!["'John Doe'", "'from Where'"]);
    } else {
        panic!("Expected INSERT statement");
    }
    Ok(())
}

#[test]
fn test_token_stream_shape() -> Result<()> {
    let tokens = tokenize("UPDATE Customers SET Country = 'Germany' WHERE CustomerID = 1;")?;
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Table,
            TokenKind::Keyword,
            TokenKind::Column,
            TokenKind::Operator,
            TokenKind::Value,
            TokenKind::Keyword,
            TokenKind::Condition,
        ]
    );
    Ok(())
}

// Test error handling - lexical errors
#[test]
fn test_syntax_errors() {
    assert!(matches!(
        tokenize("SELCT id FROM table"),
        Err(LexError::UnknownQueryType(_))
    ));
    assert_eq!(
        tokenize("CREATE TABLE users id, name)"),
        Err(LexError::UnbalancedParentheses)
    );
    assert_eq!(
        tokenize("SELECT a FROM t WHERE b = 'open"),
        Err(LexError::UnterminatedLiteral)
    );
    assert_eq!(
        tokenize("UPDATE t SET a == 1"),
        Err(LexError::MalformedAssignment("a == 1".to_string()))
    );
}

#[test]
fn test_where_errors_surface_from_builder() -> Result<()> {
    let tokens = tokenize("SELECT a FROM t WHERE a = 1 OR b")?;
    assert_eq!(
        build(tokens),
        Err(BuildError::Condition(ConditionError::Malformed("b".to_string())))
    );
    Ok(())
}

#[test]
fn test_display_reparses_to_same_statement() -> Result<()> {
    let queries = [
        "select a,b from t where x >= 1 or y != 'q r'",
        "INSERT INTO t (a, b) VALUES (1, 'two')",
        "UPDATE t SET a = 1, b = 'x' WHERE c < 3",
        "DELETE FROM t WHERE a = 1 AND b = 2",
        "DROP TABLE t",
        "DROP INDEX i",
        "CREATE TABLE t (a, b)",
        "CREATE INDEX i ON t (a)",
    ];
    for sql in queries {
        let first = parse(sql)?;
        let second = parse(&first.to_string())?;
        assert_eq!(first, second, "round trip of {}", sql);
    }
    Ok(())
}
