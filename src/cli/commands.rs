//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Lima template census CLI
#[derive(Parser, Debug)]
#[command(name = "lima-census")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API base URL override
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current API quota for the core and search buckets
    Limits,

    /// Search code and report template statistics
    Search {
        /// Search query, in the service's query grammar
        query: String,

        /// Upper bound on collected records (the last page may overshoot)
        #[arg(long, default_value = "1000")]
        max_results: usize,

        /// Origin repository whose files are counted separately
        #[arg(long, default_value = "lima-vm/lima")]
        origin: String,
    },

    /// Report the advertised result total for each query phrasing
    Probe {
        /// Queries to probe, one request each
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// List forks of a repository, most-starred first
    Forks {
        /// Repository as owner/repo
        repo: String,

        /// Upper bound on listed forks
        #[arg(long, default_value = "100")]
        max_forks: usize,
    },

    /// Fetch and print one file from a repository
    Fetch {
        /// Repository as owner/repo
        repo: String,

        /// File path within the repository
        path: String,
    },
}
