//! # Storefront Core
//!
//! Domain types and the open/closed status resolver for the restaurant's
//! public site. Nothing in this crate performs I/O: the schedule arrives
//! through the [`store::ScheduleStore`] seam and "now" through
//! [`clock::Clock`], so the resolver itself stays a pure function.

pub mod clock;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod store;

pub use resolver::resolve;
