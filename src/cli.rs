use clap::Parser;
use log::LevelFilter;

use crate::config::FilterConfig;
use crate::error::FindResult;
use crate::matcher::Composition;
use crate::walker::{DEFAULT_ARCHIVE_EXTENSION, TreeWalker};

#[derive(Parser, Debug)]
#[command(name = "zipfind")]
#[command(version)]
#[command(about = "Find files inside ZIP archives across a directory tree", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipfind --name '*.txt'               text files in any archive below .\n  \
  zipfind /data --size 10M             entries larger than 10 MiB\n  \
  zipfind --name report.txt --maxdepth 2   reports near the top of the tree")]
pub struct Cli {
    /// Directory to search
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: String,

    /// Glob pattern for entry names
    #[arg(long, value_name = "GLOB", default_value = "")]
    pub name: String,

    /// Only entries larger than this many bytes (K/M/G suffixes allowed)
    #[arg(long, value_name = "SIZE", default_value = "", allow_hyphen_values = true)]
    pub size: String,

    /// Minimum entry depth
    #[arg(
        long = "mindepth",
        alias = "min-depth",
        value_name = "N",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub min_depth: String,

    /// Maximum entry depth
    #[arg(
        long = "maxdepth",
        alias = "max-depth",
        value_name = "N",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub max_depth: String,

    /// Extension of archive files
    #[arg(long, value_name = "EXT", default_value = DEFAULT_ARCHIVE_EXTENSION)]
    pub ext: String,

    /// Follow symbolic links
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Match on name only, ignoring size and depth (legacy behavior)
    #[arg(long)]
    pub name_only: bool,

    /// More diagnostics (-vv => debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode, errors only
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn filter_config(&self) -> FindResult<FilterConfig> {
        FilterConfig::parse(&self.name, &self.size, &self.min_depth, &self.max_depth)
    }

    pub fn composition(&self) -> Composition {
        if self.name_only {
            Composition::NameOnly
        } else {
            Composition::All
        }
    }

    pub fn walker(&self) -> TreeWalker {
        TreeWalker::new(&self.root)
            .extension(&self.ext)
            .follow_links(self.follow_links)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
