//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "passbook")]
#[command(about = "Plain-text local password book", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file to use (overrides PASSBOOK_FILE and the config file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to read (overrides PASSBOOK_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add or replace an entry
    Add {
        /// Name of the service
        name: String,

        /// Username for the service
        username: String,

        /// Password, stored as given
        password: String,
    },

    /// Show one entry by name (case-insensitive)
    Get {
        /// Name of the service
        name: String,
    },

    /// Show all entries with their passwords
    List,

    /// Show service names and usernames only
    Names,

    /// Find entries whose name or username contains a term
    Search {
        /// Text to look for (case-insensitive)
        term: String,
    },

    /// Delete an entry by name
    Delete {
        /// Name of the service
        name: String,
    },

    /// Write a readable text report of all entries
    Export {
        /// Destination file (default: export_file from config)
        path: Option<PathBuf>,
    },

    /// Merge entries from a JSON data file; imported entries win
    Import {
        /// JSON file in the data file format
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
