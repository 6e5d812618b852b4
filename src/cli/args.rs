//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// companion-compat - Check an installed companion against the supported version range.
#[derive(Debug, Parser)]
#[command(name = "companion-compat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .compat/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show the major.minor values behind the verdict
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the installed version (default if no command specified)
    Check(CheckArgs),

    /// Show the reference versions this build supports
    References(ReferencesArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Check this version instead of reading the environment
    #[arg(long, value_name = "VERSION")]
    pub installed: Option<String>,

    /// Environment variable holding the installed version
    #[arg(long, value_name = "NAME")]
    pub var: Option<String>,

    /// Fail unless the installed version is fully compatible
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `references` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReferencesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
