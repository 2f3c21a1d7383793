//! Catalog Module
//!
//! Table and column metadata consumed by the SQL front end: the read-only
//! `SchemaSource` interface, an in-memory `Schema`, a JSON loader and the
//! semantic analyzer that validates statements against a schema.

pub mod schema;
pub mod table;
pub mod column;
pub mod loader;
pub mod validation;
pub mod validation_error;


// Re-export key types
pub use self::schema::{Schema, SchemaError, SchemaSource};
pub use self::table::Table;
pub use self::column::Column;
pub use self::loader::{SchemaLoader, SchemaLoadError, DEFAULT_SCHEMA_FILE};
pub use self::validation::{SemanticAnalyzer, analyze};
pub use self::validation_error::{SemanticError, SemanticResult};
