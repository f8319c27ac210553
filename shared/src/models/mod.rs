//! Data models
//!
//! Shared between the engines and their UI consumers. Prices are
//! integer MXN (the store has no fractional unit).

pub mod cart;
pub mod order;
pub mod schedule;

// Re-exports
pub use cart::*;
pub use order::*;
pub use schedule::*;
