#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Once;

use anyhow::{Result, bail};
use async_trait::async_trait;
use byteorder::{LittleEndian, WriteBytesExt};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use zipfind::ReadAt;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

enum FixtureEntry {
    File {
        name: String,
        data: Vec<u8>,
        method: CompressionMethod,
    },
    Dir(String),
}

/// Writes small but well-formed ZIP archives for tests.
#[derive(Default)]
pub struct ZipBuilder {
    entries: Vec<FixtureEntry>,
    comment: String,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored entry with the given contents.
    pub fn file(mut self, name: &str, data: &[u8]) -> Self {
        self.entries.push(FixtureEntry::File {
            name: name.to_string(),
            data: data.to_vec(),
            method: CompressionMethod::Stored,
        });
        self
    }

    /// Stored entry of `size` filler bytes.
    pub fn sized(self, name: &str, size: usize) -> Self {
        self.file(name, &vec![b'x'; size])
    }

    /// DEFLATE-compressed entry.
    pub fn deflated(mut self, name: &str, data: &[u8]) -> Self {
        self.entries.push(FixtureEntry::File {
            name: name.to_string(),
            data: data.to_vec(),
            method: CompressionMethod::Deflated,
        });
        self
    }

    pub fn dir(mut self, name: &str) -> Self {
        self.entries.push(FixtureEntry::Dir(name.to_string()));
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for entry in &self.entries {
            match entry {
                FixtureEntry::File { name, data, method } => {
                    let options = SimpleFileOptions::default().compression_method(*method);
                    writer.start_file(name.to_string(), options).unwrap();
                    writer.write_all(data).unwrap();
                }
                FixtureEntry::Dir(name) => {
                    writer
                        .add_directory(name.to_string(), SimpleFileOptions::default())
                        .unwrap();
                }
            }
        }
        if !self.comment.is_empty() {
            writer.set_comment(self.comment.clone());
        }

        writer.finish().unwrap().into_inner()
    }

    pub fn write_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, self.build()).unwrap();
    }
}

/// Archive made of a bare Central Directory, with each entry's declared
/// uncompressed size and no file data.
///
/// Covers layouts `ZipWriter` does not produce for small inputs: ZIP64
/// records (sizes in the 0x0001 extra field) and a classic EOCD whose
/// 16-bit entry count has wrapped.
pub fn central_directory_only(entries: &[(String, u64)], zip64: bool) -> Vec<u8> {
    let mut out = Vec::new();

    for (name, size) in entries {
        let name = name.as_bytes();
        let mut extra = Vec::new();
        let declared = if zip64 {
            extra.write_u16::<LittleEndian>(0x0001).unwrap();
            extra.write_u16::<LittleEndian>(16).unwrap();
            extra.write_u64::<LittleEndian>(*size).unwrap();
            extra.write_u64::<LittleEndian>(*size).unwrap();
            0xFFFF_FFFF
        } else {
            *size as u32
        };

        out.extend_from_slice(b"PK\x01\x02");
        out.write_u16::<LittleEndian>(45).unwrap(); // version made by
        out.write_u16::<LittleEndian>(45).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(0).unwrap(); // stored
        out.write_u16::<LittleEndian>(0).unwrap(); // time
        out.write_u16::<LittleEndian>(0x21).unwrap(); // date
        out.write_u32::<LittleEndian>(0).unwrap(); // crc
        out.write_u32::<LittleEndian>(declared).unwrap();
        out.write_u32::<LittleEndian>(declared).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(extra.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // comment
        out.write_u16::<LittleEndian>(0).unwrap(); // disk
        out.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        out.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        out.write_u32::<LittleEndian>(0).unwrap(); // local header offset
        out.extend_from_slice(name);
        out.extend_from_slice(&extra);
    }

    let cd_size = out.len() as u64;
    let count = entries.len() as u64;

    if zip64 {
        let eocd64_offset = out.len() as u64;
        out.extend_from_slice(b"PK\x06\x06");
        out.write_u64::<LittleEndian>(44).unwrap();
        out.write_u16::<LittleEndian>(45).unwrap();
        out.write_u16::<LittleEndian>(45).unwrap();
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u64::<LittleEndian>(count).unwrap();
        out.write_u64::<LittleEndian>(count).unwrap();
        out.write_u64::<LittleEndian>(cd_size).unwrap();
        out.write_u64::<LittleEndian>(0).unwrap();

        out.extend_from_slice(b"PK\x06\x07");
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u64::<LittleEndian>(eocd64_offset).unwrap();
        out.write_u32::<LittleEndian>(1).unwrap();
    }

    let (eocd_count, eocd_size, eocd_offset) = if zip64 {
        (0xFFFF, 0xFFFF_FFFF, 0xFFFF_FFFF)
    } else {
        // Wraps once there are more than 65535 entries
        (count as u16, cd_size as u32, 0)
    };
    out.extend_from_slice(b"PK\x05\x06");
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(eocd_count).unwrap();
    out.write_u16::<LittleEndian>(eocd_count).unwrap();
    out.write_u32::<LittleEndian>(eocd_size).unwrap();
    out.write_u32::<LittleEndian>(eocd_offset).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();

    out
}

/// In-memory data source.
pub struct MemoryReader(pub Vec<u8>);

#[async_trait]
impl ReadAt for MemoryReader {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<()> {
        let start = offset as usize;
        let Some(chunk) = self.0.get(start..start + buf.len()) else {
            bail!("read past end of buffer");
        };
        buf.copy_from_slice(chunk);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.0.len() as u64
    }
}

/// The `(archive, entry)` pairs printed for each match.
pub fn match_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
