//! Core types shared across modules

pub mod error;
pub mod stats;

pub use error::SyncError;
pub use stats::SyncStats;
