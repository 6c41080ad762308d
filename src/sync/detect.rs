//! Change detection policy

use std::fs;
use std::path::Path;

/// Decide whether `src` must be (re)copied over `dest`.
///
/// Metadata-only comparison, short-circuiting to "differ" on any
/// uncertainty: a missing destination, a failed metadata lookup on either
/// side, or a non-regular file all force a copy rather than risk silent
/// staleness. Equal size and equal modification time is the only "same"
/// outcome; content is never hashed, so an in-place edit that preserves both
/// goes undetected. Known limitation, traded for speed.
pub fn files_differ(src: &Path, dest: &Path) -> bool {
    let Ok(src_meta) = fs::metadata(src) else {
        return true;
    };
    let Ok(dest_meta) = fs::metadata(dest) else {
        return true;
    };
    if !src_meta.is_file() || !dest_meta.is_file() {
        return true;
    }
    if src_meta.len() != dest_meta.len() {
        return true;
    }
    match (src_meta.modified(), dest_meta.modified()) {
        (Ok(src_mtime), Ok(dest_mtime)) => src_mtime != dest_mtime,
        _ => true,
    }
}
