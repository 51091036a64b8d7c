//! `fulfillment-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod name;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use name::{ItemName, WarehouseName};
pub use value_object::ValueObject;
