//! Path filtering - include/exclude decisions per relative path

mod pattern;

pub use pattern::CompiledPattern;

use crate::types::SyncError;

/// Include/exclude filter applied to relative paths.
///
/// Built once per sync run and immutable afterwards. When at least one
/// include pattern is configured, a path must match one of them to be
/// considered at all; any exclude match then vetoes the path regardless of
/// the include result. Match order within each list does not affect the
/// outcome (any-match semantics).
#[derive(Debug, Clone)]
pub struct PathFilter {
    includes: Vec<CompiledPattern>,
    excludes: Vec<CompiledPattern>,
}

impl PathFilter {
    /// Compile include and exclude globs into a filter.
    pub fn new(include_globs: &[String], exclude_globs: &[String]) -> Result<Self, SyncError> {
        Ok(Self {
            includes: compile_all(include_globs)?,
            excludes: compile_all(exclude_globs)?,
        })
    }

    /// Decide whether a relative path participates in the sync.
    ///
    /// Exclude always overrides include for a path matching both.
    pub fn should_include(&self, relative_path: &str) -> bool {
        if !self.includes.is_empty() && !matches_any(&self.includes, relative_path) {
            return false;
        }
        !matches_any(&self.excludes, relative_path)
    }
}

fn compile_all(globs: &[String]) -> Result<Vec<CompiledPattern>, SyncError> {
    globs.iter().map(|glob| CompiledPattern::new(glob)).collect()
}

fn matches_any(patterns: &[CompiledPattern], text: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(text))
}
