//! Paged search collector
//!
//! Walks a paged search endpoint (`q`, `per_page`, 1-based `page`) and
//! accumulates records until a terminal condition. Strictly sequential:
//! one outstanding request at a time, a fixed pause between pages.

use super::types::SearchPage;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestPacer};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Collects records from a paged search endpoint
pub struct Collector<'a> {
    client: &'a HttpClient,
    pacer: RequestPacer,
    per_page: u32,
}

impl<'a> Collector<'a> {
    /// Create a collector paced by the client's search interval
    pub fn new(client: &'a HttpClient) -> Self {
        let interval = client.config().search_interval;
        Self::with_pacer(client, RequestPacer::new(interval))
    }

    /// Create a collector sharing an existing pacer
    ///
    /// Pacers clone shallowly, so a pacer handed out by a surrounding client
    /// keeps spacing requests across collection runs.
    pub fn with_pacer(client: &'a HttpClient, pacer: RequestPacer) -> Self {
        Self {
            client,
            pacer,
            per_page: client.config().per_page,
        }
    }

    /// Collect up to `max_results` records matching `query`
    ///
    /// Records arrive in page order, and within a page in service order;
    /// duplicates across overlapping pages are kept. The final page is never
    /// truncated, so the result may exceed `max_results` by up to one page.
    ///
    /// Throttling (403) and query rejection (422) end the run with whatever
    /// was accumulated. Any other non-2xx status, and any transport failure,
    /// is a hard error with no partial results.
    pub async fn collect<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<T>> {
        let mut results: Vec<T> = Vec::new();
        let mut page: u32 = 1;

        while results.len() < max_results {
            self.pacer.wait().await;

            let response = self
                .client
                .get(
                    path,
                    &[
                        ("q", query.to_string()),
                        ("per_page", self.per_page.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .await?;

            let status = response.status();

            if status == StatusCode::FORBIDDEN {
                warn!("throttled after {} results, stopping early", results.len());
                break;
            }

            if status == StatusCode::UNPROCESSABLE_ENTITY {
                debug!(
                    "query rejected or no more pages after {} results",
                    results.len()
                );
                break;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::http_status(status.as_u16(), body));
            }

            let body_text = response.text().await.map_err(Error::Http)?;
            let body: SearchPage<T> = serde_json::from_str(&body_text)?;

            if body.items.is_empty() {
                break;
            }

            debug!(
                "page {page}: {} records (accumulated {})",
                body.items.len(),
                results.len() + body.items.len()
            );
            results.extend(body.items);

            if results.len() as u64 >= body.total_count || results.len() >= max_results {
                break;
            }

            page += 1;
        }

        Ok(results)
    }
}

impl std::fmt::Debug for Collector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collector")
            .field("per_page", &self.per_page)
            .field("pacer", &self.pacer)
            .finish_non_exhaustive()
    }
}
