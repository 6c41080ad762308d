//! Sync engine
//!
//! Drives one synchronization run through its linear phases: validate the
//! source root, build the path filter, copy changed or missing files,
//! optionally mirror deletions, then report a summary.

pub mod detect;

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use filetime::FileTime;
use walkdir::WalkDir;

use crate::config::Config;
use crate::filter::PathFilter;
use crate::types::{SyncError, SyncStats};
use crate::util::{display_path, ensure_parent_dir, relative_posix};

/// Run one synchronization pass from source to destination.
///
/// Progress, dry-run, and summary lines are written to `out`. Fatal
/// conditions (invalid source, traversal, copy, or delete failures) are
/// returned as errors and abort the run; files already copied are not rolled
/// back. Returns the accumulated statistics on success.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<SyncStats, SyncError> {
    if !config.source.is_dir() {
        return Err(SyncError::InvalidSource(config.source.clone()));
    }

    let started = Instant::now();
    let filter = PathFilter::new(&config.include_patterns, &config.exclude_patterns)?;
    let mut stats = SyncStats::default();

    // Relative paths of every source file that passed the filter; the mirror
    // phase treats destination files outside this set as stale.
    let mut included_sources: HashSet<String> = HashSet::new();

    copy_phase(config, &filter, &mut stats, &mut included_sources, out)?;

    if config.mirror {
        mirror_phase(config, &filter, &included_sources, &mut stats, out)?;
    }

    let elapsed = started.elapsed();
    write_summary(config, &stats, out)?;
    if config.show_time {
        write_timing(elapsed, &stats, out)?;
    }

    Ok(stats)
}

/// Enumerate regular files under the source root, copying everything the
/// filter admits and the change detector flags as differing.
fn copy_phase(
    config: &Config,
    filter: &PathFilter,
    stats: &mut SyncStats,
    included_sources: &mut HashSet<String>,
    out: &mut dyn Write,
) -> Result<(), SyncError> {
    for entry in WalkDir::new(&config.source).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative_posix(&config.source, entry.path());
        if !filter.should_include(&rel) {
            stats.files_skipped += 1;
            continue;
        }
        included_sources.insert(rel.clone());

        let dest_path = config.destination.join(&rel);
        let is_overwrite = dest_path.exists();
        if !detect::files_differ(entry.path(), &dest_path) {
            stats.files_skipped += 1;
            continue;
        }

        // Counted even under dry-run so throughput can be estimated; a
        // failed size lookup is not worth aborting the transfer over.
        if let Ok(meta) = entry.metadata() {
            stats.bytes_transferred += meta.len();
        }

        ensure_parent_dir(&dest_path, config.dry_run, out)?;

        if config.dry_run {
            let verb = if is_overwrite {
                "Would overwrite"
            } else {
                "Would copy"
            };
            writeln!(
                out,
                "[DRY RUN] {}: {} \u{2192} {}",
                verb,
                display_path(entry.path()),
                display_path(&dest_path)
            )?;
        } else {
            fs::copy(entry.path(), &dest_path).map_err(|source| SyncError::Copy {
                src: entry.path().to_path_buf(),
                dest: dest_path.clone(),
                source,
            })?;
            propagate_mtime(entry.path(), &dest_path);
        }

        if is_overwrite {
            stats.files_overwritten += 1;
        } else {
            stats.files_copied += 1;
        }
    }
    Ok(())
}

/// Delete destination files that pass the filter but were not produced by
/// the copy phase. The filter applies symmetrically: an excluded destination
/// file is never considered stale.
fn mirror_phase(
    config: &Config,
    filter: &PathFilter,
    included_sources: &HashSet<String>,
    stats: &mut SyncStats,
    out: &mut dyn Write,
) -> Result<(), SyncError> {
    // A destination root that does not exist yet has nothing to delete.
    if !config.destination.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(&config.destination).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative_posix(&config.destination, entry.path());
        if !filter.should_include(&rel) {
            continue;
        }
        if included_sources.contains(&rel) {
            continue;
        }

        if config.dry_run {
            writeln!(
                out,
                "[DRY RUN] Would delete: {}",
                display_path(entry.path())
            )?;
        } else {
            fs::remove_file(entry.path()).map_err(|source| SyncError::Delete {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }
        stats.files_deleted += 1;
    }
    Ok(())
}

/// Best-effort copy of the source mtime onto the freshly written
/// destination. Failure only degrades future change detection, never the
/// copied content, so it is not propagated.
fn propagate_mtime(src: &Path, dest: &Path) {
    if let Ok(meta) = fs::metadata(src) {
        let mtime = FileTime::from_last_modification_time(&meta);
        let _ = filetime::set_file_mtime(dest, mtime);
    }
}

fn write_summary(config: &Config, stats: &SyncStats, out: &mut dyn Write) -> Result<(), SyncError> {
    if config.dry_run {
        writeln!(
            out,
            "[SUMMARY] {} files would be copied, {} files would be overwritten, {} files would be deleted.",
            stats.files_copied, stats.files_overwritten, stats.files_deleted
        )?;
    } else {
        writeln!(
            out,
            "[SUMMARY] Copied: {}, Overwritten: {}, Deleted: {}, Skipped: {}",
            stats.files_copied, stats.files_overwritten, stats.files_deleted, stats.files_skipped
        )?;
    }
    Ok(())
}

fn write_timing(
    elapsed: Duration,
    stats: &SyncStats,
    out: &mut dyn Write,
) -> Result<(), SyncError> {
    let millis = elapsed.as_millis();
    let seconds = millis as f64 / 1000.0;
    let mib = stats.bytes_transferred as f64 / (1024.0 * 1024.0);
    let mib_per_sec = if seconds > 0.0 { mib / seconds } else { 0.0 };
    writeln!(
        out,
        "[TIMING] Duration: {} ms, Transferred: {:.2} MiB, Throughput: {:.2} MiB/s",
        millis, mib, mib_per_sec
    )?;
    Ok(())
}
