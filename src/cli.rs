//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Zenith blog engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name (default: zenith.toml)
    #[arg(short = 'C', long, default_value = "zenith.toml")]
    pub config: PathBuf,

    /// Author name override for published and exported posts
    #[arg(short, long)]
    pub author: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List posts, optionally narrowed to a folder
    List {
        /// Folder to filter by (e.g. "blog/engineering"); "All" lists everything
        #[arg(short, long)]
        folder: Option<String>,

        /// Print the post list as JSON instead of log lines
        #[arg(long)]
        json: bool,
    },

    /// Print the folder hierarchy derived from post paths
    Folders,

    /// Show a single post with its author profile
    Show {
        /// Post id
        id: String,
    },

    /// Show an author profile
    Author {
        /// Author name (unknown names get a guest profile)
        name: String,
    },

    /// Import a markdown file into the saved draft
    Import {
        /// Path to a markdown file
        path: PathBuf,
    },

    /// Export the saved draft as a markdown file
    Export {
        /// Output path (defaults to `{slug}.md` in the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Draft post content from a topic with the generation service
    Generate {
        /// Topic to write about
        topic: String,

        /// Writing tone (defaults to [generate.tone] from config)
        #[arg(long)]
        tone: Option<String>,
    },

    /// Rewrite the saved draft's content under an instruction
    Improve {
        /// Editing instruction (e.g. "make it more concise")
        instruction: String,
    },

    /// Publish the saved draft to the post store
    Publish {
        /// Target folder (defaults to the draft's folder)
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Inspect or discard the saved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

/// Operations on the saved draft
#[derive(Subcommand, Debug, Clone)]
pub enum DraftAction {
    /// Print the saved draft
    Show,
    /// Delete the saved draft
    Clear,
}
