//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all rime
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `build`: Build ranked rhyme family TSV files from the datasets
//! - `lookup`: Show pronunciation variants and rhyme units for one word
//! - `init`: Initialize rime configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Mode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.args.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the dataset-reading commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Phonetic dictionary in CMUdict format (overrides config file)
    #[arg(long)]
    pub dict: Option<PathBuf>,

    /// Word frequency file, word<TAB>zipf per line (overrides config file)
    #[arg(long)]
    pub frequencies: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for TSV files (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Minimum Zipf score to retain a word (overrides config file)
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Drop families with fewer members than this (overrides config file)
    #[arg(long)]
    pub min_family_size: Option<usize>,

    /// Cap on spelling variants per family (overrides config file)
    #[arg(long)]
    pub max_variants: Option<usize>,

    /// Orthographic ending length for spelling variants (overrides config file)
    #[arg(long)]
    pub ending_length: Option<usize>,

    /// Rhyme classification mode (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of families shown in the preview table (overrides config file)
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Parser)]
pub struct LookupArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Word to look up
    pub word: String,

    #[command(flatten)]
    pub args: LookupArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build ranked rhyme family TSV files from the phonetic and frequency datasets
    Build(BuildCommand),
    /// Show pronunciation variants, rhyme units and frequency for a single word
    Lookup(LookupCommand),
    /// Initialize a new .rimerc.json configuration file
    Init,
}
