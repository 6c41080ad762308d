//! Configuration management

use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for dirsync
#[derive(Debug, Parser)]
#[command(
    name = "dirsync",
    version,
    about = "One-way directory synchronization with glob filtering, mirror deletes, and dry-run previews"
)]
pub struct Cli {
    /// Source directory
    #[arg(short = 's', long, value_name = "PATH")]
    pub source: PathBuf,

    /// Destination directory
    #[arg(short = 'd', long, value_name = "PATH")]
    pub destination: PathBuf,

    /// Show what would happen without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Delete files in destination not present in source (respecting filters)
    #[arg(long)]
    pub mirror: bool,

    /// Glob pattern to exclude (can be repeated)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Glob pattern to include (can be repeated); if any are set, only
    /// matching paths are considered, before excludes apply
    #[arg(long = "include", value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Print timing and throughput summary
    #[arg(long = "time")]
    pub show_time: bool,
}

/// Resolved configuration for one sync run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination directory
    pub destination: PathBuf,

    /// Dry run (report actions, don't execute)
    pub dry_run: bool,

    /// Mirror mode (delete stale destination files)
    pub mirror: bool,

    /// Print a [TIMING] line after the summary
    pub show_time: bool,

    /// Exclude patterns (globs)
    pub exclude_patterns: Vec<String>,

    /// Include patterns (globs)
    pub include_patterns: Vec<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            source: cli.source,
            destination: cli.destination,
            dry_run: cli.dry_run,
            mirror: cli.mirror,
            show_time: cli.show_time,
            exclude_patterns: cli.exclude,
            include_patterns: cli.include,
        }
    }
}
