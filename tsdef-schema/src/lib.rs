//! Schema files for the tsdef TypeScript definition generator.
//!
//! A schema file describes the classes to generate declarations for, which of
//! them are roots, and how the generator is configured. Both TOML and JSON are
//! accepted; parse and validation errors are [`miette`] diagnostics pointing
//! into the source.
//!
//! ```
//! use tsdef_schema::Schema;
//!
//! let schema: Schema = r#"
//!     roots = ["com.example.Person"]
//!
//!     [[classes]]
//!     id = "com.example.Person"
//!     properties = [{ name = "age", type = { of = "int", nullable = true } }]
//! "#
//! .parse()
//! .unwrap();
//!
//! assert_eq!(
//!     schema.generate().definitions_text(),
//!     "interface Person {\n    age: number | null;\n}"
//! );
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod raw;
mod schema;
mod settings;
mod token;
mod validate;

pub use error::{Error, Result};
pub use schema::{DEFAULT_SCHEMA, Format, Schema};
pub use settings::GeneratorSettings;
