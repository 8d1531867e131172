//! Predicates over archive entries.
//!
//! Each filter becomes one [`EntryMatcher`]; an unconfigured filter becomes
//! [`EntryMatcher::Always`]. The matchers are combined once, before the walk
//! starts, into the [`Predicate`] handed to the archive scanner.

pub mod glob;

use crate::config::{DepthRange, FilterConfig};
use crate::depth::entry_depth;
use crate::zip::ArchiveEntry;

pub use glob::GlobPattern;

/// A single filter over an entry and the path of the archive holding it.
#[derive(Debug, Clone)]
pub enum EntryMatcher {
    /// Accepts every entry.
    Always,
    /// Entry name satisfies the glob pattern.
    Name(GlobPattern),
    /// Uncompressed size strictly greater than the threshold.
    Size(u64),
    /// Entry depth within the inclusive range.
    Depth(DepthRange),
}

impl EntryMatcher {
    pub fn name(pattern: Option<&GlobPattern>) -> Self {
        pattern.map_or(Self::Always, |p| Self::Name(p.clone()))
    }

    pub fn size(min_size: Option<u64>) -> Self {
        min_size.map_or(Self::Always, Self::Size)
    }

    pub fn depth(range: Option<DepthRange>) -> Self {
        range.map_or(Self::Always, Self::Depth)
    }

    pub fn matches(&self, entry: &ArchiveEntry, container_path: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Name(pattern) => pattern.matches(&entry.name),
            Self::Size(threshold) => entry.uncompressed_size > *threshold,
            Self::Depth(range) => range.contains(entry_depth(container_path, &entry.name)),
        }
    }
}

/// How the individual matchers decide a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    /// Every matcher must accept the entry.
    #[default]
    All,
    /// Only the name matcher decides; size and depth are validated but
    /// ignored. Reproduces the behavior of the historical tool.
    NameOnly,
}

/// The composite predicate applied to every entry of every archive.
#[derive(Debug, Clone)]
pub struct Predicate {
    name: EntryMatcher,
    size: EntryMatcher,
    depth: EntryMatcher,
    composition: Composition,
}

impl Predicate {
    pub fn new(config: &FilterConfig, composition: Composition) -> Self {
        Self {
            name: EntryMatcher::name(config.name.as_ref()),
            size: EntryMatcher::size(config.min_size),
            depth: EntryMatcher::depth(config.depth),
            composition,
        }
    }

    /// A predicate that accepts everything.
    pub fn always() -> Self {
        Self {
            name: EntryMatcher::Always,
            size: EntryMatcher::Always,
            depth: EntryMatcher::Always,
            composition: Composition::All,
        }
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn matches(&self, entry: &ArchiveEntry, container_path: &str) -> bool {
        match self.composition {
            Composition::All => [&self.name, &self.size, &self.depth]
                .into_iter()
                .all(|m| m.matches(entry, container_path)),
            Composition::NameOnly => self.name.matches(entry, container_path),
        }
    }
}
