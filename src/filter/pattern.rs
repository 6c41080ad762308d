//! Glob pattern compilation

use regex::Regex;

use crate::types::SyncError;

/// A glob pattern compiled into a full-string matcher.
///
/// The dialect is deliberately small: `*` matches any run of characters
/// including none (path separators too), `?` matches exactly one character,
/// and a trailing `/` turns the pattern into a directory prefix covering
/// everything nested beneath it. Matching is anchored at both ends; the
/// whole candidate string must be consumed.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a glob pattern string.
    ///
    /// Every string is a usable glob: characters with special meaning in the
    /// regex engine are escaped, so the worst case is a pattern that matches
    /// only itself literally.
    pub fn new(glob: &str) -> Result<Self, SyncError> {
        let regex = Regex::new(&glob_to_regex(glob)).map_err(|source| SyncError::Pattern {
            pattern: glob.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Test a relative path against the pattern.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.regex.is_match(relative_path)
    }
}

/// Translate a glob into an anchored regex source string.
///
/// A trailing `/` marks a directory-prefix pattern: the remainder is
/// compiled as usual and the candidate must continue with `/` plus any
/// suffix. The `(?s)` flag keeps `*` and `?` spanning every character.
fn glob_to_regex(glob: &str) -> String {
    let (body, dir_prefix) = match glob.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (glob, false),
    };

    let mut pattern = String::with_capacity(body.len() * 2 + 8);
    pattern.push_str("(?s)^");

    let mut literal = String::new();
    for ch in body.chars() {
        match ch {
            '*' | '?' => {
                if !literal.is_empty() {
                    pattern.push_str(&regex::escape(&literal));
                    literal.clear();
                }
                pattern.push_str(if ch == '*' { ".*" } else { "." });
            }
            other => literal.push(other),
        }
    }
    if !literal.is_empty() {
        pattern.push_str(&regex::escape(&literal));
    }

    if dir_prefix {
        pattern.push_str("/.*");
    }
    pattern.push('$');
    pattern
}
