// DDL Clause Extractors
//
// This module extracts the clauses of DROP and CREATE statements:
// DROP TABLE|INDEX <name>, CREATE TABLE <table> (<col>, ...) and
// CREATE INDEX <index> ON <table> (<col>, ...)

use log::trace;

use crate::query::parser::lexer::{LexError, LexResult, Token, TokenKind};
use super::lexer_core::{
    expect_empty, identifier_list, paren_group, single_identifier, split_at_keyword, split_words,
    trim_identifier,
};
use super::lexer_select::warn_on_duplicates;

/// Extract a DROP statement; exactly a target keyword and a name must follow
pub fn extract_drop(rest: &str) -> LexResult<Vec<Token>> {
    let words = split_words(rest);
    let invalid = || LexError::InvalidDropTarget(rest.trim().to_string());

    let [target, name] = words.as_slice() else {
        return Err(invalid());
    };
    let name = trim_identifier(name);
    if name.is_empty() {
        return Err(invalid());
    }

    let kind = match target.to_ascii_uppercase().as_str() {
        "TABLE" => TokenKind::Table,
        "INDEX" => TokenKind::Index,
        _ => return Err(invalid()),
    };
    trace!("drop: {:?} {}", kind, name);

    Ok(vec![
        Token::keyword(target.to_ascii_uppercase()),
        Token::new(kind, name),
    ])
}

/// Extract a CREATE statement, dispatching on TABLE or INDEX
pub fn extract_create(rest: &str) -> LexResult<Vec<Token>> {
    let rest = rest.trim_start();
    let target_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (target, after) = rest.split_at(target_len);

    match target.to_ascii_uppercase().as_str() {
        "TABLE" => extract_create_table(after),
        "INDEX" => extract_create_index(after),
        _ => Err(LexError::InvalidCreateTarget(target.to_string())),
    }
}

fn extract_create_table(after: &str) -> LexResult<Vec<Token>> {
    let group = paren_group(after)?.ok_or(LexError::MissingClause("columns"))?;
    let table = single_identifier(group.before, "table")?;
    expect_empty(group.after)?;
    let columns = identifier_list(group.inner, "columns", "column")?;
    warn_on_duplicates(&columns);
    trace!("create table: {} {:?}", table, columns);

    let mut tokens = vec![Token::keyword("TABLE"), Token::new(TokenKind::Table, table)];
    tokens.extend(columns.into_iter().map(|c| Token::new(TokenKind::Column, c)));
    Ok(tokens)
}

fn extract_create_index(after: &str) -> LexResult<Vec<Token>> {
    let (index_part, on_rest) = split_at_keyword(after, "ON").ok_or(LexError::MissingClause("on"))?;
    let index = single_identifier(index_part, "index")?;

    let group = paren_group(on_rest)?.ok_or(LexError::MissingClause("columns"))?;
    let table = single_identifier(group.before, "table")?;
    expect_empty(group.after)?;
    let columns = identifier_list(group.inner, "columns", "column")?;
    trace!("create index: {} on {} {:?}", index, table, columns);

    let mut tokens = vec![
        Token::keyword("INDEX"),
        Token::new(TokenKind::Index, index),
        Token::keyword("ON"),
        Token::new(TokenKind::Table, table),
    ];
    tokens.extend(columns.into_iter().map(|c| Token::new(TokenKind::Column, c)));
    Ok(tokens)
}
