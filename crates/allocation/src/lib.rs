//! Order allocation across prioritized warehouses.
//!
//! This crate contains the allocator and the values it exchanges, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).
//!
//! Warehouses are consulted strictly in the order given: the first warehouse
//! is the preferred source. The allocator is greedy and single-pass; it never
//! compares costs or revisits a warehouse.

pub mod allocator;
pub mod order;
pub mod shipment;

pub use allocator::{AllocationOutcome, AllocationPlan, Rejection, Shortfall, allocate, plan};
pub use order::{Order, OrderLine};
pub use shipment::{Shipment, ShipmentLine, ShipmentList};
