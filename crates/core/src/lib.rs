//! `stockfile-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no file handling).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
