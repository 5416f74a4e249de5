//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{LinkId, NodeId, NodeKind};

/// Hierarchical file/folder item manager with an attached link shortener
#[derive(Parser, Debug)]
#[command(name = "cabinet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Override the data file path
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full item hierarchy
    Tree,

    /// List immediate children of a folder
    Ls {
        /// Folder id
        id: NodeId,
    },

    /// Print file content
    Cat {
        /// File id
        id: NodeId,
    },

    /// Search items by name substring
    Search {
        /// Query substring (case-insensitive)
        query: String,
    },

    /// Create an item
    Add {
        /// Display name
        name: String,
        /// Item kind
        #[arg(short, long, value_enum)]
        kind: ItemKind,
        /// Parent folder id (omit for a root item)
        #[arg(short, long)]
        parent: Option<NodeId>,
        /// Initial content (files only)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Replace file content
    Write {
        /// File id
        id: NodeId,
        /// New content (reads stdin when omitted)
        content: Option<String>,
    },

    /// Rename an item
    Rename {
        /// Item id
        id: NodeId,
        /// New display name
        name: String,
    },

    /// Delete an item and all its descendants
    Rm {
        /// Item id
        id: NodeId,
    },

    /// Manage shortened links
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// List all links
    List,

    /// Shorten a URL
    Add {
        /// Target URL
        url: String,
    },

    /// Resolve a short code to its target URL
    Resolve {
        /// Short code
        code: String,
    },

    /// Delete a link
    Rm {
        /// Link id
        id: LinkId,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Print a config template
    Init,
}

/// Item kind as a CLI value.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ItemKind {
    Folder,
    File,
}

impl From<ItemKind> for NodeKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Folder => NodeKind::Folder,
            ItemKind::File => NodeKind::File,
        }
    }
}
