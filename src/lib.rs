//! # lima-census
//!
//! Survey tooling for estimating the population of Lima VM templates on
//! GitHub: how many template files a code-search query matches, which
//! repositories and owners they live in, how many come from forks, and how
//! fork visibility distorts the numbers.
//!
//! Every invocation is one bounded batch of API calls: collect, report,
//! exit. Nothing persists between runs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lima_census::{ClientConfig, GitHubClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = GitHubClient::new(ClientConfig::from_env());
//!
//!     let hits = client
//!         .search_code("minimumLimaVersion extension:yml", 1000)
//!         .await?;
//!     println!("{} template files found", hits.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       GitHubClient                          │
//! │  rate_limits()   search_code()   list_forks()   contents    │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                      │
//!         ┌────────┴───────┐      ┌───────┴────────┐
//!         │ search (paged  │      │ http (thin GET │
//!         │ collector,     │      │ client + fixed │
//!         │ partial-result │      │ interval pacer)│
//!         │ policy)        │      │                │
//!         └────────────────┘      └────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Client configuration
pub mod config;

/// HTTP plumbing: thin client and request pacing
pub mod http;

/// GitHub REST API surface
pub mod github;

/// Paged search collection
pub mod search;

/// Search result analysis
pub mod analysis;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use analysis::SearchStats;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use search::Collector;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
