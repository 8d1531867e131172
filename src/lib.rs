//! # zipfind
//!
//! Recursively search the contents of ZIP archives.
//!
//! A directory tree is walked from a root; every file with the archive
//! extension is opened and its entry list is checked against a composite
//! predicate built from up to three filters:
//!
//! - entry name against a glob pattern
//! - uncompressed size strictly above a threshold
//! - nesting depth within an inclusive range, where depth counts the `/`
//!   separators of both the archive's path and the entry's name
//!
//! Matches are written as `<archive> : <entry>` lines. Only the Central
//! Directory of each archive is read; nothing is extracted and archives
//! nested inside archives are not opened.
//!
//! ## Example
//!
//! ```no_run
//! use zipfind::{Composition, FilterConfig, Predicate, TreeWalker};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FilterConfig::parse("*.txt", "1K", "", "")?;
//!     let predicate = Predicate::new(&config, Composition::All);
//!
//!     let stats = TreeWalker::new("/data")
//!         .search(&predicate, &mut std::io::stdout())
//!         .await?;
//!     println!("{} matches in {} archives", stats.matches, stats.archives);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod depth;
pub mod error;
pub mod io;
pub mod matcher;
pub mod scanner;
pub mod stats;
pub mod walker;
pub mod zip;

pub use cli::Cli;
pub use config::{DepthRange, FilterConfig};
pub use depth::entry_depth;
pub use error::{FindError, FindResult};
pub use io::{LocalFileReader, ReadAt};
pub use matcher::{Composition, EntryMatcher, GlobPattern, Predicate};
pub use scanner::ArchiveScanner;
pub use stats::ScanStats;
pub use walker::TreeWalker;
pub use self::zip::{ArchiveEntry, ZipParser};
