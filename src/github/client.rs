//! GitHub API client
//!
//! Holds the HTTP client plus one pacer per endpoint class. Search requests
//! are spaced further apart than listing requests because the service runs
//! a much smaller quota for them.

use super::types::{CodeResult, QuotaBucket, RateLimits, RepoContent, Repository};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestPacer};
use crate::search::{Collector, SearchPage};

/// Client for the survey's API surface
pub struct GitHubClient {
    http: HttpClient,
    search_pacer: RequestPacer,
    list_pacer: RequestPacer,
}

impl GitHubClient {
    /// Create a client from a config
    pub fn new(config: ClientConfig) -> Self {
        let search_pacer = RequestPacer::new(config.search_interval);
        let list_pacer = RequestPacer::new(config.list_interval);

        Self {
            http: HttpClient::new(config),
            search_pacer,
            list_pacer,
        }
    }

    /// The config this client was built with
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    // ========================================================================
    // Quota
    // ========================================================================

    /// Fetch the current rate-limit status
    pub async fn rate_limits(&self) -> Result<RateLimits> {
        self.http.get_json("/rate_limit", &[]).await
    }

    /// Fail when fewer than `minimum_remaining` search requests are left
    ///
    /// Returns the search bucket on success so callers can report it.
    pub async fn ensure_search_quota(&self, minimum_remaining: u64) -> Result<QuotaBucket> {
        let limits = self.rate_limits().await?;
        let search = limits.resources.search;

        if search.remaining < minimum_remaining {
            return Err(Error::QuotaLow {
                remaining: search.remaining,
                limit: search.limit,
                reset: search.reset_at(),
            });
        }

        Ok(search)
    }

    // ========================================================================
    // Code Search
    // ========================================================================

    /// Search code, collecting up to `max_results` hits
    ///
    /// See [`Collector::collect`] for the termination and partial-result
    /// contract.
    pub async fn search_code(&self, query: &str, max_results: usize) -> Result<Vec<CodeResult>> {
        Collector::with_pacer(&self.http, self.search_pacer.clone())
            .collect("/search/code", query, max_results)
            .await
    }

    /// Fetch only the advertised total for a query
    ///
    /// Issues a single one-record request; useful for comparing query
    /// phrasings without spending quota on full collection. Unlike
    /// [`Self::search_code`], every non-2xx here is an error.
    pub async fn search_total(&self, query: &str) -> Result<u64> {
        self.search_pacer.wait().await;

        let page: SearchPage<serde_json::Value> = self
            .http
            .get_json(
                "/search/code",
                &[("q", query.to_string()), ("per_page", "1".to_string())],
            )
            .await?;

        Ok(page.total_count)
    }

    // ========================================================================
    // Repositories
    // ========================================================================

    /// Fetch one repository
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        self.http.get_json(&format!("/repos/{owner}/{repo}"), &[]).await
    }

    /// List forks of a repository, most-starred first
    ///
    /// Listing-class paged loop: the body is a bare array with no advertised
    /// total, so the loop stops on a short or empty page, or once
    /// `max_forks` is reached. Every non-2xx is fatal.
    pub async fn list_forks(
        &self,
        owner: &str,
        repo: &str,
        max_forks: usize,
    ) -> Result<Vec<Repository>> {
        let per_page = self.config().per_page;
        let mut forks: Vec<Repository> = Vec::new();
        let mut page: u32 = 1;

        while forks.len() < max_forks {
            self.list_pacer.wait().await;

            let items: Vec<Repository> = self
                .http
                .get_json(
                    &format!("/repos/{owner}/{repo}/forks"),
                    &[
                        ("per_page", per_page.to_string()),
                        ("page", page.to_string()),
                        ("sort", "stargazers".to_string()),
                    ],
                )
                .await?;

            if items.is_empty() {
                break;
            }

            let short_page = items.len() < per_page as usize;
            forks.extend(items);

            if short_page {
                break;
            }

            page += 1;
        }

        Ok(forks)
    }

    // ========================================================================
    // File Content
    // ========================================================================

    /// Fetch one file and decode it to text
    pub async fn get_file_content(&self, owner: &str, repo: &str, path: &str) -> Result<String> {
        let content: RepoContent = self
            .http
            .get_json(&format!("/repos/{owner}/{repo}/contents/{path}"), &[])
            .await?;

        content.decode()
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}
