//! CLI runner - executes commands

use crate::analysis::SearchStats;
use crate::cli::commands::{Cli, Commands};
use crate::config::{ClientConfig, TOKEN_ENV_VAR};
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use std::collections::BTreeSet;
use tracing::warn;

/// Minimum search quota remaining before a survey is started
const MIN_SEARCH_QUOTA: u64 = 10;

/// How many repositories/owners a report lists before truncating
const REPORT_LIST_LIMIT: usize = 20;

/// CLI runner
pub struct Runner {
    cli: Cli,
    client: GitHubClient,
}

impl Runner {
    /// Create a new runner
    ///
    /// The credential is read from the environment exactly once, here.
    pub fn new(cli: Cli) -> Self {
        let mut config = ClientConfig::from_env();
        if let Some(base_url) = &cli.base_url {
            config.base_url = base_url.clone();
        }

        Self {
            client: GitHubClient::new(config),
            cli,
        }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Limits => self.limits().await,
            Commands::Search {
                query,
                max_results,
                origin,
            } => self.search(query, *max_results, origin).await,
            Commands::Probe { queries } => self.probe(queries).await,
            Commands::Forks { repo, max_forks } => self.forks(repo, *max_forks).await,
            Commands::Fetch { repo, path } => self.fetch(repo, path).await,
        }
    }

    /// Show current quota
    async fn limits(&self) -> Result<()> {
        let limits = self.client.rate_limits().await?;
        let core = limits.resources.core;
        let search = limits.resources.search;

        println!(
            "Core API:   {}/{} remaining, resets at {}",
            core.remaining,
            core.limit,
            core.reset_at()
        );
        println!(
            "Search API: {}/{} remaining, resets at {}",
            search.remaining,
            search.limit,
            search.reset_at()
        );

        Ok(())
    }

    /// Run a survey and print the analysis report
    async fn search(&self, query: &str, max_results: usize, origin: &str) -> Result<()> {
        if !self.client.config().has_token() {
            println!("WARNING: {TOKEN_ENV_VAR} is not set; code search requires authentication.");
            return Ok(());
        }

        match self.client.ensure_search_quota(MIN_SEARCH_QUOTA).await {
            Ok(quota) => println!(
                "Search quota: {}/{} remaining",
                quota.remaining, quota.limit
            ),
            Err(Error::QuotaLow {
                remaining,
                limit,
                reset,
            }) => {
                println!("Search quota too low ({remaining}/{limit} remaining), resets at {reset}");
                return Ok(());
            }
            // Quota inspection is best-effort; the survey itself decides.
            Err(e) => warn!("could not check quota: {e}"),
        }

        println!("Query: {query}");
        let results = self.client.search_code(query, max_results).await?;
        println!("Collected {} files (requested up to {max_results})", results.len());
        println!();

        let stats = SearchStats::from_results(&results, Some(origin));

        println!("Unique templates:    {}", stats.unique_paths());
        println!("Unique repositories: {}", stats.unique_repos());
        println!("Unique owners:       {}", stats.unique_owners());
        println!();
        println!("From {origin}: {}", stats.origin_files);
        println!("From forks:  {}", stats.fork_files);
        println!("External:    {}", stats.external_files());
        println!();

        print_listing("Repositories", &stats.repos);
        println!();
        print_listing("Owners", &stats.owners);

        Ok(())
    }

    /// Compare query phrasings by advertised total
    async fn probe(&self, queries: &[String]) -> Result<()> {
        if !self.client.config().has_token() {
            println!("WARNING: {TOKEN_ENV_VAR} is not set; code search requires authentication.");
            return Ok(());
        }

        for query in queries {
            match self.client.search_total(query).await {
                Ok(total) => println!("{total:>8}  {query}"),
                // A rejected phrasing is itself a finding; keep probing.
                Err(e) => println!("   error  {query} ({e})"),
            }
        }

        Ok(())
    }

    /// List forks of a repository
    async fn forks(&self, repo: &str, max_forks: usize) -> Result<()> {
        let (owner, name) = split_repo(repo)?;

        let parent = self.client.get_repository(owner, name).await?;
        println!(
            "{}: {} stars, {} forks",
            parent.full_name, parent.stargazers_count, parent.forks_count
        );

        let forks = self.client.list_forks(owner, name, max_forks).await?;
        println!("Retrieved {} forks (most-starred first):", forks.len());

        for fork in &forks {
            let updated = fork
                .updated_at
                .map_or_else(|| "unknown".to_string(), |t| t.to_string());
            println!(
                "  {}: {} stars, updated {updated}",
                fork.full_name, fork.stargazers_count
            );
        }

        Ok(())
    }

    /// Fetch and print one file
    async fn fetch(&self, repo: &str, path: &str) -> Result<()> {
        let (owner, name) = split_repo(repo)?;
        let content = self.client.get_file_content(owner, name, path).await?;
        print!("{content}");

        Ok(())
    }
}

/// Split an `owner/repo` argument
fn split_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(Error::config(format!(
            "expected repository as owner/repo, got '{repo}'"
        ))),
    }
}

/// Print a sorted listing, truncated with an "... and N more" tail
fn print_listing(title: &str, entries: &BTreeSet<String>) {
    println!("{title} (first {REPORT_LIST_LIMIT}):");
    for entry in entries.iter().take(REPORT_LIST_LIMIT) {
        println!("  - {entry}");
    }
    if entries.len() > REPORT_LIST_LIMIT {
        println!("  ... and {} more", entries.len() - REPORT_LIST_LIMIT);
    }
}
