//! TypeScript declaration builders.
//!
//! These describe the declarations the generator emits and render through
//! [`CodeBuilder`](crate::builder::CodeBuilder).

mod interface;
mod union;

pub use interface::Interface;
pub use union::Union;
