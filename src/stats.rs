//! Run-wide counters.

use std::time::Duration;

const MB: f64 = 1024.0 * 1024.0;

/// Aggregate statistics for one search.
///
/// Owned by the top-level run and lent mutably to the walker and scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Filesystem paths visited by the walk, directories included.
    pub paths_visited: u64,
    /// Archive containers opened.
    pub archives: u64,
    /// Entries examined across all archives.
    pub entries: u64,
    /// Sum of the archive file sizes, not of their contents.
    pub archive_bytes: u64,
    /// Entries that satisfied the predicate.
    pub matches: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn archive_megabytes(&self) -> f64 {
        self.archive_bytes as f64 / MB
    }

    /// Final report lines, as printed to the diagnostic stream.
    pub fn summary(&self, elapsed: Duration) -> String {
        format!(
            "Scanned {} archives, {} files, {:.1} MB in {:.2} sec ({} paths visited)\nFound {} matches",
            self.archives,
            self.entries,
            self.archive_megabytes(),
            elapsed.as_secs_f64(),
            self.paths_visited,
            self.matches,
        )
    }
}
