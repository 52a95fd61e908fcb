//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::env;

/// Switch, create, rename and delete console workspaces.
///
/// Every command reads the workspace list from the console API first. After a
/// change, wsctl opens the console in your browser so it reloads with the new
/// workspace.
#[derive(Parser, Debug)]
#[command(name = "wsctl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file.
    #[arg(long, global = true, env = env::CONFIG_FILE)]
    pub config: Option<PathBuf>,

    /// Print the console URL instead of opening a browser.
    #[arg(long, global = true)]
    pub no_browser: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your workspaces and mark the current one.
    List {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the current workspace.
    Current {
        /// Print the workspace as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Rename the current workspace.
    Rename {
        /// New name of the workspace.
        name: String,
    },

    /// Make another workspace current.
    Switch {
        /// Id or name of the workspace.
        workspace: String,
    },

    /// Create a workspace and switch to it.
    Create {
        /// Name of the new workspace.
        name: String,
    },

    /// Delete a workspace you own.
    Delete {
        /// Id or name of the workspace.
        workspace: String,

        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
