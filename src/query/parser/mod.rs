// SQL Parser Module
//
// This module is responsible for turning SQL text into a Statement:
// lexer -> statement builder (with the WHERE condition sub-parser).
// Schema checks happen afterwards in catalog::validation.

pub mod lexer;
pub mod ast;
pub mod conditions;
pub mod builder;
pub mod components;

// Export key types
pub use self::lexer::{Lexer, Token, TokenKind, LexError, tokenize};
pub use self::conditions::{ConditionError, parse_conditions};
pub use self::builder::{StatementBuilder, BuildError, build};
pub use self::ast::Statement;
