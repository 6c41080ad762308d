//! SyncStats - Counters accumulated over one sync run

/// Statistics for a single sync run.
///
/// Owned by the engine invocation that produces it and returned to the
/// caller when the run finishes, so runs stay independently testable and
/// re-entrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Files newly copied (no destination counterpart existed)
    pub files_copied: u64,

    /// Files overwritten (destination existed and differed)
    pub files_overwritten: u64,

    /// Destination files deleted in mirror mode
    pub files_deleted: u64,

    /// Files left untouched (filtered out or already up to date)
    pub files_skipped: u64,

    /// Source bytes accounted for transfer; accumulated in dry-run too so
    /// throughput can be estimated
    pub bytes_transferred: u64,
}

impl SyncStats {
    /// Total number of files written to the destination
    pub fn files_transferred(&self) -> u64 {
        self.files_copied + self.files_overwritten
    }
}
