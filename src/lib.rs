// SQL Front End
//
// Turns one SQL statement into a validated, typed Statement:
// lexer -> statement builder -> semantic analysis against a schema.

pub mod catalog;
pub mod query;

// Re-export key items for convenient access
pub use catalog::{Schema, SchemaLoader, SchemaSource};
pub use query::parser::ast::Statement;
pub use query::parser::{Lexer, Token, TokenKind};
pub use query::{ParseError, ParseResult, parse_sql};
