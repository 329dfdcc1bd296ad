//! TypeScript declaration generation.
//!
//! [`TypeScriptGenerator`] walks the class graph reachable from a set of roots
//! through a [`MetadataProvider`](tsdef_ir::MetadataProvider) and renders one
//! declaration per class: an `interface` for classes and interfaces, a string
//! union alias for enumerations.
//!
//! Which members are emitted, their names and their types can be customized
//! with [`Transformer`]s, composed in order by a [`TransformerPipeline`].

pub mod ast;
pub mod builder;
mod config;
mod emitter;
mod formatter;
mod generator;
pub mod transform;
mod walker;

pub use config::{GeneratorConfig, VoidType};
pub use generator::TypeScriptGenerator;
pub use transform::{DefaultTransformer, SkipClassTransformer, Transformer, TransformerPipeline};
