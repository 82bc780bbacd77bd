//! CLI module
//!
//! Command-line interface for running surveys.
//!
//! # Commands
//!
//! - `limits` - Show API quota for the core and search buckets
//! - `search` - Search code and report template statistics
//! - `probe` - Report the advertised total for each query phrasing
//! - `forks` - List forks of a repository, most-starred first
//! - `fetch` - Fetch and print one file from a repository

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
