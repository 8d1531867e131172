//! Filter configuration.
//!
//! Filters arrive as raw strings where an empty string means "unset".
//! [`FilterConfig::parse`] validates them once, before any scanning: a bad
//! name pattern or size threshold is fatal, while a malformed depth bound
//! only produces a warning and falls back to its default.

use log::warn;

use crate::error::{FindError, FindResult};
use crate::matcher::GlobPattern;

/// Lower depth bound used when none is given.
pub const DEFAULT_MIN_DEPTH: i64 = 0;

/// Inclusive range of accepted entry depths. `max: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthRange {
    pub min: i64,
    pub max: Option<i64>,
}

impl DepthRange {
    pub fn new(min: i64, max: Option<i64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, depth: usize) -> bool {
        let depth = i64::try_from(depth).unwrap_or(i64::MAX);
        depth >= self.min && self.max.is_none_or(|max| depth <= max)
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DEPTH, None)
    }
}

/// Validated, immutable filter settings.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub name: Option<GlobPattern>,
    pub min_size: Option<u64>,
    pub depth: Option<DepthRange>,
}

impl FilterConfig {
    pub fn parse(name: &str, size: &str, min_depth: &str, max_depth: &str) -> FindResult<Self> {
        let name = if name.is_empty() {
            None
        } else {
            Some(GlobPattern::new(name)?)
        };

        let min_size = if size.is_empty() {
            None
        } else {
            Some(parse_size(size)?)
        };

        let depth = if min_depth.is_empty() && max_depth.is_empty() {
            None
        } else {
            Some(DepthRange::new(
                parse_depth_bound(min_depth, "min").unwrap_or(DEFAULT_MIN_DEPTH),
                parse_depth_bound(max_depth, "max"),
            ))
        };

        Ok(Self {
            name,
            min_size,
            depth,
        })
    }

    /// True when no filter is configured.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.min_size.is_none() && self.depth.is_none()
    }
}

/// Parse a size threshold such as `4096`, `10K` or `+1M`.
///
/// Suffixes are binary multiples and case-insensitive.
pub fn parse_size(value: &str) -> FindResult<u64> {
    let invalid = || FindError::InvalidSize {
        value: value.to_string(),
    };

    let digits = value.strip_prefix('+').unwrap_or(value);
    let (digits, multiplier) = match digits.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some('K') => (&digits[..digits.len() - 1], 1u64 << 10),
        Some('M') => (&digits[..digits.len() - 1], 1u64 << 20),
        Some('G') => (&digits[..digits.len() - 1], 1u64 << 30),
        _ => (digits, 1),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    digits
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(invalid)
}

/// Parse one depth bound; empty or malformed input yields `None`.
fn parse_depth_bound(value: &str, which: &str) -> Option<i64> {
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(bound) => Some(bound),
        Err(e) => {
            warn!("Ignoring {which} depth '{value}' ({e}), using default");
            None
        }
    }
}
