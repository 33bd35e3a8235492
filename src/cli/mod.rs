pub mod commands;

use crate::github::options::{Direction, RepoSort, RepoType, SearchSort};
use crate::github::RepoRef;
use crate::showcase::ProjectSort;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Folio - GitHub catalog for a portfolio site", long_about = None)]
pub struct Cli {
    /// GitHub username to query
    #[arg(short, long, global = true, env = "GITHUB_USERNAME")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current API quota
    RateLimit,

    /// Show a user's profile
    Profile,

    /// List a user's repositories
    Repos {
        #[arg(long = "type", value_enum, default_value_t = RepoType::Owner)]
        repo_type: RepoType,

        #[arg(long, value_enum, default_value_t = RepoSort::Updated)]
        sort: RepoSort,

        #[arg(long, value_enum, default_value_t = Direction::Desc)]
        direction: Direction,

        #[arg(long, default_value_t = 100)]
        per_page: u32,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show a single repository
    Repo {
        /// owner/name or GitHub URL
        repo: RepoRef,
    },

    /// Show bytes of code per language
    Languages {
        /// owner/name or GitHub URL
        repo: RepoRef,
    },

    /// List recent commits
    Commits {
        /// owner/name or GitHub URL
        repo: RepoRef,

        #[arg(long, default_value_t = 30)]
        per_page: u32,

        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Branch or commit SHA to list from
        #[arg(long)]
        branch: Option<String>,
    },

    /// Print a repository README
    Readme {
        /// owner/name or GitHub URL
        repo: RepoRef,
    },

    /// List a user's gists
    Gists,

    /// List a user's recent public events
    Events {
        #[arg(long, default_value_t = 30)]
        per_page: u32,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Search public repositories
    Search {
        /// Search query, e.g. "language:rust stars:>100"
        query: String,

        #[arg(long, value_enum)]
        sort: Option<SearchSort>,

        #[arg(long, value_enum, default_value_t = Direction::Desc)]
        order: Direction,

        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=100))]
        per_page: u32,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Up to six recently updated non-fork repositories
    Pinned,

    /// Events per day over the last 100 public events
    Contributions {
        /// Accepted but not used yet
        #[arg(long)]
        year: Option<i32>,
    },

    /// Starred, non-fork repositories with optional filters
    Projects {
        #[arg(long)]
        language: Option<String>,

        /// Case-insensitive match on name, description or topics
        #[arg(short, long)]
        query: Option<String>,

        #[arg(long, value_enum, default_value_t = ProjectSort::Stars)]
        sort: ProjectSort,

        /// Repository names to leave out (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Profile, pinned repositories and contributions fetched together
    Snapshot,
}
