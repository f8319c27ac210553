//! Shared types for the storefront core
//!
//! Domain models, error taxonomy and small utilities used by the
//! engine crate. Everything here is serializable and I/O free.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use serde::{Deserialize, Serialize};
