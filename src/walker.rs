//! Directory tree traversal.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FindResult;
use crate::matcher::Predicate;
use crate::scanner::ArchiveScanner;
use crate::stats::ScanStats;

/// Extension identifying archive containers by default.
pub const DEFAULT_ARCHIVE_EXTENSION: &str = "zip";

/// Walks a directory tree and scans every archive container found in it.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    extension: String,
    follow_links: bool,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_ARCHIVE_EXTENSION.to_string(),
            follow_links: false,
        }
    }

    /// Extension (without the dot) that marks a file as an archive.
    /// Compared case-sensitively.
    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `path` names an archive container.
    pub fn is_archive(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
    }

    /// Run a whole search with `predicate` and return the final counters.
    pub async fn search<W: Write>(
        &self,
        predicate: &Predicate,
        out: &mut W,
    ) -> FindResult<ScanStats> {
        let scanner = ArchiveScanner::new(predicate);
        let mut stats = ScanStats::new();
        self.walk(&scanner, &mut stats, out).await?;
        Ok(stats)
    }

    /// Visit every path under the root, in directory-listing order.
    ///
    /// Paths the filesystem refuses to visit are skipped without a trace.
    /// Failing to open an archive aborts the walk.
    pub async fn walk<W: Write>(
        &self,
        scanner: &ArchiveScanner<'_>,
        stats: &mut ScanStats,
        out: &mut W,
    ) -> FindResult<()> {
        let entries = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_map(|entry| entry.ok());

        for entry in entries {
            stats.paths_visited += 1;

            if entry.file_type().is_file() && self.is_archive(entry.path()) {
                scanner.scan(entry.path(), stats, out).await?;
            }
        }

        Ok(())
    }
}
