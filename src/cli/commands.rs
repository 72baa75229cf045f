//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vaultex")]
#[command(about = "Export tagged notes from a markdown vault", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export notes carrying a tag into a zip archive
    Export {
        /// Vault root directory to scan
        root: PathBuf,

        /// Tag to select (a leading '#' is accepted)
        #[arg(short, long)]
        tag: String,

        /// Follow wiki-links from tagged notes until no new notes appear
        #[arg(short, long)]
        recursive: bool,

        /// Directory to write the archive to (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all tags used in the vault
    Tags {
        /// Vault root directory to scan
        root: PathBuf,
    },
}
