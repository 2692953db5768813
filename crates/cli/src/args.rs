//! Command-line arguments for `ghprojects`.

use std::time::Duration;

use clap::{Parser, Subcommand};
use projects::{DEFAULT_ITEM_LIMIT, DEFAULT_SEARCH_LIMIT};

/// Inspect and edit GitHub Projects V2 boards from the terminal.
#[derive(Parser, Debug)]
#[command(name = "ghprojects")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub personal access token.
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GraphQL endpoint (for GitHub Enterprise Server).
    #[arg(long, global = true, env = "GITHUB_GRAPHQL_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, global = true, env = "GHPROJECTS_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// `--timeout-secs` as a [`Duration`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List projects of an organization or user
    Projects {
        /// Organization or user login
        owner: String,
    },

    /// List field definitions of a project
    Fields { owner: String, number: u32 },

    /// List project items with their field values
    Items {
        owner: String,
        number: u32,
        /// Items to fetch before filtering
        #[arg(long, default_value_t = DEFAULT_ITEM_LIMIT)]
        limit: u32,
        /// Keep only issues and pull requests in this state (e.g. open)
        #[arg(long)]
        state: Option<String>,
    },

    /// Find project items using GitHub issue search syntax
    ///
    /// Draft issues are never found.
    Search {
        owner: String,
        number: u32,
        /// Search query, e.g. "bug label:backend repo:acme/app"
        query: String,
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: u32,
    },

    /// Create an issue in a repository
    CreateIssue {
        owner: String,
        repo: String,
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Add an existing issue to a project
    AddIssue {
        owner: String,
        number: u32,
        issue_owner: String,
        issue_repo: String,
        issue_number: u64,
    },

    /// Create a draft issue inside a project
    AddDraft {
        owner: String,
        number: u32,
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },

    /// Set one field value on a project item
    ///
    /// The value's type is inferred from the field id prefix.
    UpdateField {
        owner: String,
        number: u32,
        item_id: String,
        field_id: String,
        value: String,
    },

    /// Remove an item from a project
    DeleteItem {
        owner: String,
        number: u32,
        item_id: String,
    },

    /// Change a project's title, description, or visibility
    UpdateProject {
        owner: String,
        number: u32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        public: Option<bool>,
    },
}

impl Command {
    /// Subcommand name, recorded on the root span.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Projects { .. } => "projects",
            Self::Fields { .. } => "fields",
            Self::Items { .. } => "items",
            Self::Search { .. } => "search",
            Self::CreateIssue { .. } => "create-issue",
            Self::AddIssue { .. } => "add-issue",
            Self::AddDraft { .. } => "add-draft",
            Self::UpdateField { .. } => "update-field",
            Self::DeleteItem { .. } => "delete-item",
            Self::UpdateProject { .. } => "update-project",
        }
    }

    /// What failed, for the `Error: ... Details: ...` line.
    pub fn failure_summary(&self) -> String {
        match self {
            Self::Projects { owner } => format!("Could not list projects for {owner}"),
            Self::Fields { owner, number } => {
                format!("Could not get fields for project {owner}/{number}")
            }
            Self::Items { owner, number, .. } => {
                format!("Could not get items for project {owner}/{number}")
            }
            Self::Search { owner, number, .. } => {
                format!("Could not search items in project {owner}/{number}")
            }
            Self::CreateIssue { owner, repo, .. } => {
                format!("Could not create issue in {owner}/{repo}")
            }
            Self::AddIssue { .. } => "Could not add issue to project".to_string(),
            Self::AddDraft { .. } => "Could not create draft issue".to_string(),
            Self::UpdateField { .. } => "Could not update field value".to_string(),
            Self::DeleteItem { .. } => "Could not delete item".to_string(),
            Self::UpdateProject { owner, number, .. } => {
                format!("Could not update project {owner}/{number}")
            }
        }
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
