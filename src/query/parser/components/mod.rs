// SQL Lexer Components
//
// Each component extracts the clauses of one family of query shapes.
// The shared scanning primitives live in lexer_core.

pub mod lexer_core;
pub mod lexer_select;
pub mod lexer_dml;
pub mod lexer_ddl;

// Re-export the per-shape extractors
pub use lexer_select::extract_select;
pub use lexer_dml::{extract_insert, extract_update, extract_delete};
pub use lexer_ddl::{extract_drop, extract_create};
