//! Search wire types

use serde::Deserialize;

/// One page of a search response
///
/// `total_count` is the service-advertised total across all pages. Some
/// responses omit it; a missing value reads as 0, and the empty-page check
/// in the collector remains the termination backstop.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    /// Advertised number of matches across the whole result set
    #[serde(default)]
    pub total_count: u64,

    /// Records on this page, in service order
    #[serde(default)]
    pub items: Vec<T>,
}
