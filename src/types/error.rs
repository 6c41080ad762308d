//! Error types for dirsync

use std::path::PathBuf;
use thiserror::Error;

/// Error types for sync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source root is missing or not a directory
    #[error("Source path does not exist or is not a directory: {}", .0.display())]
    InvalidSource(PathBuf),

    /// A glob pattern failed to compile into a matcher
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Directory enumeration failed mid-walk
    #[error("Traversal error: {0}")]
    Traversal(#[from] walkdir::Error),

    /// A single file copy failed
    #[error("Copy failed '{}' -> '{}': {source}", .src.display(), .dest.display())]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mirror-phase deletion failed
    #[error("Delete failed '{}': {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination parent directory could not be created
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
