//! Cart management: in-memory store plus the durable redb mirror

pub mod mirror;
pub mod store;

pub use mirror::{CartMirror, MirrorError, MirrorResult};
pub use store::CartStore;
