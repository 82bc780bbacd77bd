//! HTTP plumbing
//!
//! A thin GET-only client plus fixed-interval request pacing.
//!
//! There is deliberately no retry machinery here: throttling and query
//! rejection are terminal conditions handled by the callers, and every other
//! failure aborts the run.

mod client;
mod rate_limit;

pub use client::HttpClient;
pub use rate_limit::RequestPacer;
