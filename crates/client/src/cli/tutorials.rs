//! Tutorial CLI commands.

use clap::{Parser, Subcommand};

/// Tutorial management commands.
#[derive(Debug, Parser)]
pub struct TutorialsCommand {
    #[command(subcommand)]
    pub action: TutorialsAction,
}

/// Available tutorial actions.
#[derive(Debug, Subcommand)]
pub enum TutorialsAction {
    /// List all tutorials.
    List,
    /// Get tutorial by ID.
    Get {
        /// Tutorial ID.
        id: i64,
    },
    /// Create a new tutorial.
    Create {
        /// Tutorial title.
        #[arg(long)]
        title: String,
        /// Tutorial description.
        #[arg(long)]
        description: Option<String>,
        /// Mark the tutorial as published.
        #[arg(long)]
        published: bool,
    },
    /// Update a tutorial.
    Update {
        /// Tutorial ID.
        id: i64,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New published flag.
        #[arg(long)]
        published: Option<bool>,
    },
    /// Delete tutorial by ID.
    Delete {
        /// Tutorial ID.
        id: i64,
    },
    /// Delete every tutorial.
    DeleteAll,
    /// Find tutorials by exact title.
    Search {
        /// Tutorial title.
        title: String,
    },
}
