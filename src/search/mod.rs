//! Paged search collection
//!
//! The one loop in this crate with real state: repeatedly fetch pages of a
//! search endpoint, accumulate records, and stop on exhaustion, limits, or
//! the service's throttle/reject signals.
//!
//! # Termination
//!
//! A collection run ends in exactly one of five ways:
//! - enough records accumulated (caller limit or advertised total reached)
//! - an empty page (exhaustion)
//! - HTTP 403 (throttled): partial results are returned, not an error
//! - HTTP 422 (query rejected or cursor past the last page): same
//! - any other failure: hard error, partial results discarded

mod collector;
mod types;

pub use collector::Collector;
pub use types::SearchPage;
