//! Typed API records
//!
//! Only the fields the survey actually projects are typed; everything else
//! the service returns is ignored during deserialization rather than
//! modelled.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// ============================================================================
// Rate Limits
// ============================================================================

/// Response of the rate-limit endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimits {
    /// Per-operation-class quota buckets
    pub resources: RateLimitResources,
}

/// The quota buckets the survey cares about
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResources {
    /// General listing/fetch quota
    pub core: QuotaBucket,
    /// Code-search quota (much smaller, per minute)
    pub search: QuotaBucket,
}

/// One quota bucket
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuotaBucket {
    /// Bucket capacity
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// Unix timestamp at which the bucket refills
    pub reset: i64,
}

impl QuotaBucket {
    /// Refill time as a UTC timestamp
    pub fn reset_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.reset, 0).unwrap_or_default()
    }
}

// ============================================================================
// Repositories
// ============================================================================

/// Repository owner
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// User or organization login
    pub login: String,
}

/// Repository descriptor
///
/// The search endpoint embeds a slimmer repository object than the listing
/// endpoints, so the count fields default to zero when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
    /// Bare repository name
    pub name: String,
    /// Owning user or organization
    pub owner: Owner,
    /// Whether this repository is a fork
    #[serde(default)]
    pub fork: bool,
    /// Number of forks
    #[serde(default)]
    pub forks_count: u64,
    /// Number of stars
    #[serde(default)]
    pub stargazers_count: u64,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One code-search hit
#[derive(Debug, Clone, Deserialize)]
pub struct CodeResult {
    /// Path of the matching file within its repository
    pub path: String,
    /// Repository the file lives in
    pub repository: Repository,
}

// ============================================================================
// File Content
// ============================================================================

/// Response of the single-file content endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RepoContent {
    /// Payload encoding, `base64` for regular files
    #[serde(default)]
    pub encoding: Option<String>,
    /// Encoded payload
    #[serde(default)]
    pub content: Option<String>,
}

impl RepoContent {
    /// Decode the payload to text
    ///
    /// Base64 payloads arrive wrapped in newlines, which are stripped before
    /// decoding. Any other encoding passes the raw content through.
    pub fn decode(&self) -> Result<String> {
        let raw = self.content.clone().unwrap_or_default();

        if self.encoding.as_deref() != Some("base64") {
            return Ok(raw);
        }

        let compact: Vec<u8> = raw
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(compact)
            .map_err(|e| Error::decode(format!("invalid base64 payload: {e}")))?;

        String::from_utf8(bytes).map_err(|e| Error::decode(format!("payload is not UTF-8: {e}")))
    }
}
