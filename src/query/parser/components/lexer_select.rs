// SELECT Clause Extractor
//
// SELECT <col>[, <col>...] FROM <table> [WHERE <conditions>]

use log::{trace, warn};

use crate::query::parser::lexer::{LexError, LexResult, Token, TokenKind};
use super::lexer_core::{find_keyword, identifier_list, single_identifier, split_at_keyword};

/// Extract the projection list, table and optional WHERE body of a SELECT
pub fn extract_select(rest: &str) -> LexResult<Vec<Token>> {
    let (projection, after_from) =
        split_at_keyword(rest, "FROM").ok_or(LexError::MissingClause("from"))?;

    let columns = identifier_list(projection, "columns", "column")?;
    warn_on_duplicates(&columns);

    let (table_part, where_body) = match find_keyword(after_from, "WHERE") {
        Some(pos) => (&after_from[..pos], Some(after_from[pos + "WHERE".len()..].trim())),
        None => (after_from, None),
    };
    let table = single_identifier(table_part, "table")?;
    trace!("select: table={} columns={:?} where={:?}", table, columns, where_body);

    let mut tokens: Vec<Token> = columns
        .into_iter()
        .map(|c| Token::new(TokenKind::Column, c))
        .collect();
    tokens.push(Token::keyword("FROM"));
    tokens.push(Token::new(TokenKind::Table, table));
    if let Some(body) = where_body {
        tokens.push(Token::keyword("WHERE"));
        tokens.push(Token::new(TokenKind::Condition, body));
    }
    Ok(tokens)
}

pub(crate) fn warn_on_duplicates(columns: &[&str]) {
    for (i, column) in columns.iter().enumerate() {
        if columns[..i].contains(column) {
            warn!("column '{}' listed more than once", column);
        }
    }
}
