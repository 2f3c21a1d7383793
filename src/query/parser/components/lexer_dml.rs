// DML Clause Extractors
//
// This module extracts the clauses of INSERT, UPDATE and DELETE statements.

use log::trace;

use crate::query::parser::lexer::{LexError, LexResult, Token, TokenKind};
use super::lexer_core::{
    count_unquoted, expect_empty, find_keyword, identifier_list, paren_group, single_identifier,
    split_at_keyword, split_unquoted, split_words, trim_identifier,
};
use super::lexer_select::warn_on_duplicates;

/// Extract an INSERT statement
///
/// INSERT INTO <table> (<col>, ...) VALUES (<value>, ...)
pub fn extract_insert(rest: &str) -> LexResult<Vec<Token>> {
    let (before_into, after_into) =
        split_at_keyword(rest, "INTO").ok_or(LexError::MissingClause("into"))?;
    expect_empty(before_into)?;

    let (head, tail) =
        split_at_keyword(after_into, "VALUES").ok_or(LexError::MissingClause("values"))?;

    // Column list is required
    let columns_group = paren_group(head)?.ok_or(LexError::MissingClause("columns"))?;
    let table = single_identifier(columns_group.before, "table")?;
    expect_empty(columns_group.after)?;
    let columns = identifier_list(columns_group.inner, "columns", "column")?;
    warn_on_duplicates(&columns);

    let values_group = paren_group(tail)?.ok_or(LexError::MissingClause("values"))?;
    expect_empty(values_group.before)?;
    expect_empty(values_group.after)?;
    let values = value_list(values_group.inner)?;

    if columns.len() != values.len() {
        return Err(LexError::ArityMismatch {
            columns: columns.len(),
            values: values.len(),
        });
    }
    trace!("insert: table={} columns={:?} values={:?}", table, columns, values);

    let mut tokens = vec![Token::keyword("INTO"), Token::new(TokenKind::Table, table)];
    tokens.extend(columns.into_iter().map(|c| Token::new(TokenKind::Column, c)));
    tokens.push(Token::keyword("VALUES"));
    tokens.extend(values.into_iter().map(|v| Token::new(TokenKind::Value, v)));
    Ok(tokens)
}

fn value_list(s: &str) -> LexResult<Vec<&str>> {
    if trim_identifier(s).is_empty() {
        return Err(LexError::MissingClause("values"));
    }
    split_unquoted(s, ',')
        .into_iter()
        .map(|entry| {
            let value = trim_identifier(entry);
            if value.is_empty() {
                Err(LexError::InvalidIdentifier("value"))
            } else {
                Ok(value)
            }
        })
        .collect()
}

/// Extract an UPDATE statement
///
/// UPDATE <table> SET <col> = <value>[, ...] [WHERE <conditions>]
pub fn extract_update(rest: &str) -> LexResult<Vec<Token>> {
    let (table_part, after_set) =
        split_at_keyword(rest, "SET").ok_or(LexError::MissingClause("set"))?;
    let table = single_identifier(table_part, "table")?;

    let (set_body, where_body) = match find_keyword(after_set, "WHERE") {
        Some(pos) => (&after_set[..pos], Some(after_set[pos + "WHERE".len()..].trim())),
        None => (after_set, None),
    };
    if trim_identifier(set_body).is_empty() {
        return Err(LexError::MissingClause("assignments"));
    }

    let mut tokens = vec![Token::new(TokenKind::Table, table), Token::keyword("SET")];
    for fragment in split_unquoted(set_body, ',') {
        let (column, value) = split_assignment(fragment)?;
        tokens.push(Token::new(TokenKind::Column, column));
        tokens.push(Token::new(TokenKind::Operator, "="));
        tokens.push(Token::new(TokenKind::Value, value));
    }

    if let Some(body) = where_body {
        tokens.push(Token::keyword("WHERE"));
        tokens.push(Token::new(TokenKind::Condition, body));
    }
    trace!("update: {} tokens", tokens.len());
    Ok(tokens)
}

/// Split one `column = value` fragment on its single `=`
fn split_assignment(fragment: &str) -> LexResult<(&str, &str)> {
    let malformed = || LexError::MalformedAssignment(fragment.trim().to_string());

    if count_unquoted(fragment, '=') != 1 {
        return Err(malformed());
    }
    let mut parts = split_unquoted(fragment, '=').into_iter();
    let (Some(left), Some(right)) = (parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let column = trim_identifier(left);
    let value = trim_identifier(right);
    // `a >= 1` and friends: the `=` belongs to a comparison operator
    if column.is_empty() || value.is_empty() || column.ends_with(['<', '>', '!']) {
        return Err(malformed());
    }
    if split_words(column).len() > 1 {
        return Err(LexError::InvalidIdentifier("column"));
    }
    Ok((column, value))
}

/// Extract a DELETE statement
///
/// DELETE FROM <table> WHERE <conditions>
pub fn extract_delete(rest: &str) -> LexResult<Vec<Token>> {
    let (before_from, after_from) =
        split_at_keyword(rest, "FROM").ok_or(LexError::MissingClause("from"))?;
    expect_empty(before_from)?;

    // Unconditional deletes are not part of this grammar
    let (table_part, where_body) =
        split_at_keyword(after_from, "WHERE").ok_or(LexError::MissingClause("where"))?;
    let table = single_identifier(table_part, "table")?;

    Ok(vec![
        Token::keyword("FROM"),
        Token::new(TokenKind::Table, table),
        Token::keyword("WHERE"),
        Token::new(TokenKind::Condition, where_body.trim()),
    ])
}
