//! ZIP central directory reading.
//!
//! Only the archive's table of contents is read: the End of Central
//! Directory record at the tail of the file points at the Central
//! Directory, which lists every entry with its name and sizes. File data is
//! never touched, so listing a large archive costs a couple of reads.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions for archives and entries larger than 4GB
//! - Archive comments up to the format's 65535-byte limit
//!
//! ## Limitations
//!
//! - No multi-disk archive support
//! - Entry names are decoded as UTF-8, lossily

mod parser;
mod structures;

pub use parser::ZipParser;
pub use structures::*;
