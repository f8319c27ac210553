//! Storefront engines for the pizzeria
//!
//! Two small state machines behind the ordering UI:
//!
//! - availability: weekly schedule → open/closed status with the
//!   next opening, fed by a push-based schedule subscription
//! - cart & pricing: mergeable cart with a durable local mirror,
//!   tier pricing for the build-your-own pizza, and the checkout
//!   summarizer that renders the outbound order message
//!
//! Everything is synchronous and single-threaded except the schedule
//! feed, which delivers snapshots at arbitrary times and drives a
//! periodic status recomputation.

pub mod availability;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod logger;
pub mod pricing;
pub mod schedule;

// Re-exports
pub use availability::compute_status;
pub use cart::CartStore;
pub use checkout::{summarize, whatsapp_url, CheckoutForm, CheckoutSession};
pub use config::StoreConfig;
pub use schedule::{FeedState, ScheduleFeed, StatusState, StatusWatcher};
