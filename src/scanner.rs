//! Matching the entries of one archive.

use std::io::Write;
use std::path::{MAIN_SEPARATOR_STR, Path};

use log::debug;

use crate::error::{FindError, FindResult};
use crate::io::LocalFileReader;
use crate::matcher::Predicate;
use crate::stats::ScanStats;
use crate::zip::{ArchiveEntry, ZipParser};

/// Applies a predicate to every entry of an archive.
pub struct ArchiveScanner<'a> {
    predicate: &'a Predicate,
}

impl<'a> ArchiveScanner<'a> {
    pub fn new(predicate: &'a Predicate) -> Self {
        Self { predicate }
    }

    /// Open the archive at `path` and report its matching entries to `out`,
    /// one `<container> : <entry>` line each.
    ///
    /// Any failure to open or list the archive is an
    /// [`FindError::ArchiveOpen`]. The file handle is released as soon as
    /// the entry list has been read, on every path.
    pub async fn scan<W: Write>(
        &self,
        path: &Path,
        stats: &mut ScanStats,
        out: &mut W,
    ) -> FindResult<()> {
        stats.archives += 1;
        debug!("Scanning archive {}", path.display());

        let open_error = |source: anyhow::Error| FindError::ArchiveOpen {
            path: path.to_path_buf(),
            source,
        };

        let entries = {
            let parser = ZipParser::new(LocalFileReader::open(path).map_err(open_error)?);
            let entries = parser.list_entries().await.map_err(open_error)?;
            stats.archive_bytes += parser.archive_size();
            entries
        };

        self.report(&entries, &container_path(path), stats, out)
    }

    /// Evaluate already listed entries of the archive shown as `container`.
    pub fn report<W: Write>(
        &self,
        entries: &[ArchiveEntry],
        container: &str,
        stats: &mut ScanStats,
        out: &mut W,
    ) -> FindResult<()> {
        for entry in entries {
            stats.entries += 1;
            if self.predicate.matches(entry, container) {
                stats.matches += 1;
                writeln!(out, "{} : {}", container, entry.name)?;
            }
        }
        Ok(())
    }
}

/// Path of an archive as shown in match lines and used for depth: a leading
/// `./` is dropped and host separators become `/`.
pub fn container_path(path: &Path) -> String {
    let path = path.strip_prefix(".").unwrap_or(path);
    let display = path.to_string_lossy();
    if MAIN_SEPARATOR_STR == "/" {
        display.into_owned()
    } else {
        display.replace(MAIN_SEPARATOR_STR, "/")
    }
}
