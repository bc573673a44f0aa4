//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan source files and write one PO catalog per locale
//! - `init`: Initialize an xpot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The provided command, or print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Catalog output directory (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Target locale; can be given multiple times (overrides config file)
    #[arg(long = "locale")]
    pub locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep catalog entries whose messages were not found in this scan
    #[arg(long)]
    pub retain_obsolete: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable messages and write PO catalogs
    Extract(ExtractCommand),
    /// Initialize a new .xpotrc.json configuration file
    Init,
}
