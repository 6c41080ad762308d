//! # dirsync - One-Way Directory Synchronizer
//!
//! Walks a source tree, copies changed or missing files into a destination
//! tree, optionally deletes destination files absent from the source
//! (mirror mode), and supports include/exclude glob filtering plus a
//! dry-run preview.

// Module declarations
pub mod config;
pub mod filter;
pub mod sync;
pub mod types;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use filter::PathFilter;
pub use types::{SyncError, SyncStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
