// Query Processing Module
//
// This module contains the SQL front end: parsing into a typed statement and
// the pipeline entry point that also runs semantic analysis.

pub mod parser;
pub mod error;

use log::debug;

use crate::catalog::{SchemaSource, analyze};
use self::parser::{Statement, build, tokenize};

// Export key public interfaces
pub use self::error::{ParseError, ParseResult};

/// Parse one SQL statement and validate it against `schema`.
///
/// Runs lexer, builder and semantic analyzer in order and returns the first
/// error any of them reports. The schema is only read.
pub fn parse_sql<S>(sql: &str, schema: &S) -> ParseResult<Statement>
where
    S: SchemaSource + ?Sized,
{
    debug!("parsing: {}", sql);
    let tokens = tokenize(sql)?;
    let statement = build(tokens)?;
    let statement = analyze(statement, schema)?;
    debug!("validated {} statement", statement.query_type());
    Ok(statement)
}
