//! GitHub REST API surface
//!
//! One method per endpoint the survey needs: quota inspection, code search,
//! repository lookup, fork listing, file content. Everything except code
//! search is a one-shot (or simply-paged) call where any non-2xx is fatal;
//! the throttle/reject tolerance belongs to the search endpoint class only.

mod client;
mod types;

pub use client::GitHubClient;
pub use types::{
    CodeResult, Owner, QuotaBucket, RateLimitResources, RateLimits, RepoContent, Repository,
};
