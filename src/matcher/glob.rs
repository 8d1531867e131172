//! Glob patterns for entry names.
//!
//! # Pattern Syntax
//!
//! - `?` matches any single character except `/`
//! - `*` matches any sequence of characters except `/`
//! - `**` matches across `/` when used as a whole path component
//! - `[abc]`, `[a-z]`, `[!a-z]` match one character from a class
//! - `{foo,bar}` matches either alternative
//! - `\` escapes the next character
//!
//! A pattern without any `/` is matched against the filename portion of the
//! entry (after the last `/`), so `*.txt` finds text files at any depth. A
//! pattern with a `/` is matched against the full entry name.

use globset::{GlobBuilder, GlobMatcher};

use crate::depth::DIR_SEP;
use crate::error::{FindError, FindResult};

/// A compiled glob pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    pattern: String,
    compiled: GlobMatcher,
    match_full_path: bool,
}

impl GlobPattern {
    /// Compile `pattern`, rejecting malformed syntax.
    pub fn new(pattern: &str) -> FindResult<Self> {
        let compiled = GlobBuilder::new(pattern)
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|e| FindError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.kind().to_string(),
            })?
            .compile_matcher();

        Ok(Self {
            pattern: pattern.to_string(),
            compiled,
            match_full_path: pattern.contains(DIR_SEP),
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Check an in-archive entry name against the pattern.
    pub fn matches(&self, entry_name: &str) -> bool {
        let target = if self.match_full_path {
            entry_name
        } else {
            // Directory entries end with '/', match on their own name
            entry_name
                .trim_end_matches(DIR_SEP)
                .rsplit(DIR_SEP)
                .next()
                .unwrap_or_default()
        };
        self.compiled.is_match(target)
    }
}
