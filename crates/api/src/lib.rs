//! HTTP API: JSON boundary around the order allocator.

pub mod app;
pub mod config;
