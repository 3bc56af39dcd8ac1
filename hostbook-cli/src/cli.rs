//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `Hostbook` command-line interface for managing SSH connection profiles
#[derive(Parser)]
#[command(name = "hostbook")]
#[command(author, version, about = "Address book of SSH connection profiles")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "HOSTBOOK_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all profiles
    #[command(about = "List all connection profiles")]
    List {
        /// Output format for the profile list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Show profile details
    #[command(about = "Show a profile and its ssh command")]
    Show {
        /// Profile name
        name: String,
    },

    /// Add a new profile
    #[command(about = "Add a new connection profile")]
    Add {
        /// Name for the new profile
        #[arg(short, long)]
        name: String,

        /// Host address (hostname or IP)
        #[arg(short = 'H', long)]
        host: String,

        /// Username for the remote login
        #[arg(short, long)]
        user: String,

        /// Port number (default 22)
        #[arg(short, long)]
        port: Option<String>,

        /// Path to SSH private key file
        #[arg(short, long)]
        key: Option<String>,

        /// Overwrite an existing profile with the same name
        #[arg(long)]
        force: bool,
    },

    /// Edit an existing profile
    #[command(about = "Change fields of an existing profile")]
    Edit {
        /// Profile name
        name: String,

        /// New host
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// New username
        #[arg(short, long)]
        user: Option<String>,

        /// New port
        #[arg(short, long)]
        port: Option<String>,

        /// New private key path
        #[arg(short, long, conflicts_with = "no_key")]
        key: Option<String>,

        /// Remove the private key
        #[arg(long)]
        no_key: bool,
    },

    /// Delete a profile
    #[command(about = "Delete a connection profile")]
    Delete {
        /// Profile name
        name: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Connect to a host by profile name
    #[command(about = "Open an SSH session to a profile's host")]
    Connect {
        /// Profile name
        name: String,

        /// Show the command that would be executed without running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Interactive menu
    #[command(about = "Start the interactive menu")]
    Menu,

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    Table,
    /// One block per profile with its command
    Details,
    /// JSON array
    Json,
}
