//! Warehouse inventory domain module.
//!
//! This crate contains business rules for warehouse stock, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod warehouse;

pub use warehouse::{StockLevels, WarehouseInventory};
