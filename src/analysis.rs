//! Search result analysis
//!
//! Aggregates a collected set of code-search hits into the statistics the
//! survey reports: unique repositories, owners, and files, plus how many
//! hits come from a designated origin repository and from forks.

use crate::github::CodeResult;
use std::collections::BTreeSet;

/// Aggregate statistics over code-search hits
///
/// The sets are ordered so reports list repositories and owners
/// alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total number of hits, duplicates included
    pub total_files: usize,
    /// Distinct repository full names
    pub repos: BTreeSet<String>,
    /// Distinct owner logins
    pub owners: BTreeSet<String>,
    /// Distinct repo-qualified file paths
    pub paths: BTreeSet<String>,
    /// Hits whose repository matches the origin prefix
    pub origin_files: usize,
    /// Hits from forked repositories
    pub fork_files: usize,
}

impl SearchStats {
    /// Compute statistics from hits
    ///
    /// `origin` is a repository full name (e.g. `lima-vm/lima`); hits from
    /// it, or from repositories whose name extends it, count as origin
    /// files.
    pub fn from_results(results: &[CodeResult], origin: Option<&str>) -> Self {
        let mut stats = Self {
            total_files: results.len(),
            ..Self::default()
        };

        for hit in results {
            let repo = &hit.repository.full_name;
            stats.repos.insert(repo.clone());
            stats.owners.insert(hit.repository.owner.login.clone());
            stats.paths.insert(format!("{repo}/{}", hit.path));

            if origin.is_some_and(|o| repo.starts_with(o)) {
                stats.origin_files += 1;
            }
            if hit.repository.fork {
                stats.fork_files += 1;
            }
        }

        stats
    }

    /// Number of distinct repositories
    pub fn unique_repos(&self) -> usize {
        self.repos.len()
    }

    /// Number of distinct owners
    pub fn unique_owners(&self) -> usize {
        self.owners.len()
    }

    /// Number of distinct repo-qualified files
    pub fn unique_paths(&self) -> usize {
        self.paths.len()
    }

    /// Hits from outside the origin repository
    pub fn external_files(&self) -> usize {
        self.total_files - self.origin_files
    }
}
