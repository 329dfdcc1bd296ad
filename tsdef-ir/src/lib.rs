//! Descriptor model for the tsdef TypeScript definition generator.
//!
//! This crate defines the pre-extracted, language-agnostic description of a
//! class graph that the generator consumes. Producing these descriptors (from
//! a runtime's reflection API, a build-time export or a hand-written schema)
//! is the job of a separate extraction step.
//!
//! # Architecture
//!
//! ```text
//! schema / reflection export → tsdef-ir (descriptors) → tsdef-codegen (declarations)
//! ```
//!
//! The generator looks classes up through the [`MetadataProvider`] trait;
//! [`ClassRegistry`] is the in-memory implementation.

mod class;
mod provider;
mod types;

pub use class::{
    ClassDescriptor, ClassKind, FunctionDescriptor, ParameterDescriptor, ParameterKind,
    PropertyDescriptor, TypeParameterDescriptor, Visibility,
};
pub use provider::{ClassRegistry, MetadataProvider};
pub use types::{ClassId, Classifier, Primitive, TypeArgument, TypeReference};
