//! Low-level ZIP archive parser.
//!
//! ## Parsing Strategy
//!
//! ZIP files are designed to be read from the end:
//! 1. Find the End of Central Directory (EOCD) at the file's end
//! 2. If ZIP64, read the ZIP64 EOCD for large archive support
//! 3. Read the Central Directory to get metadata for all entries

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use crate::io::ReadAt;
use anyhow::{Result, bail};

use super::structures::*;

/// Maximum ZIP comment size allowed by the format (65535 bytes).
///
/// This limits the search area when looking for EOCD with a comment.
const MAX_COMMENT_SIZE: u64 = 65535;

/// Low-level ZIP file parser.
///
/// The parser owns its reader, so dropping it releases the underlying
/// file handle.
///
/// ## Example
///
/// ```no_run
/// use std::path::Path;
/// use zipfind::{LocalFileReader, ZipParser};
///
/// # async fn demo() -> anyhow::Result<()> {
/// let parser = ZipParser::new(LocalFileReader::open(Path::new("data.zip"))?);
/// for entry in parser.list_entries().await? {
///     println!("{} ({} bytes)", entry.name, entry.uncompressed_size);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ZipParser<R: ReadAt> {
    /// The underlying data source
    reader: R,
    /// Total size of the archive in bytes
    size: u64,
}

impl<R: ReadAt> ZipParser<R> {
    pub fn new(reader: R) -> Self {
        let size = reader.size();
        Self { reader, size }
    }

    /// Size of the archive file in bytes.
    pub fn archive_size(&self) -> u64 {
        self.size
    }

    /// Find and parse the End of Central Directory record.
    ///
    /// Returns the record and its offset in the file. Archives with a
    /// trailing comment are handled by searching backwards for the
    /// signature.
    pub async fn find_eocd(&self) -> Result<(EndOfCentralDirectory, u64)> {
        // Optimization: First try the simple case where there's no comment.
        if self.size >= EndOfCentralDirectory::SIZE as u64 {
            let offset = self.size - EndOfCentralDirectory::SIZE as u64;
            let mut buf = vec![0u8; EndOfCentralDirectory::SIZE];
            self.reader.read_at(offset, &mut buf).await?;

            // Check for signature and zero-length comment
            if &buf[0..4] == EndOfCentralDirectory::SIGNATURE && &buf[20..22] == b"\x00\x00" {
                let eocd = EndOfCentralDirectory::from_bytes(&buf)?;
                return Ok((eocd, offset));
            }
        }

        // The EOCD could be earlier if there's a ZIP comment.
        let search_size = (MAX_COMMENT_SIZE + EndOfCentralDirectory::SIZE as u64).min(self.size);
        let search_start = self.size - search_size;

        let mut buf = vec![0u8; search_size as usize];
        self.reader.read_at(search_start, &mut buf).await?;

        // Search backwards for EOCD signature (PK\x05\x06)
        if buf.len() >= EndOfCentralDirectory::SIZE {
            for i in (0..=buf.len() - EndOfCentralDirectory::SIZE).rev() {
                if &buf[i..i + 4] != EndOfCentralDirectory::SIGNATURE {
                    continue;
                }
                // The comment length field must account for the remaining bytes
                let comment_len = u16::from_le_bytes([buf[i + 20], buf[i + 21]]) as usize;
                if comment_len == buf.len() - i - EndOfCentralDirectory::SIZE {
                    let eocd = EndOfCentralDirectory::from_bytes(
                        &buf[i..i + EndOfCentralDirectory::SIZE],
                    )?;
                    return Ok((eocd, search_start + i as u64));
                }
            }
        }

        bail!("Not a valid ZIP file")
    }

    /// Read the ZIP64 End of Central Directory record.
    ///
    /// Its locator sits immediately before the regular EOCD. Returns the
    /// record and its offset in the file.
    pub async fn read_zip64_eocd(&self, eocd_offset: u64) -> Result<(Zip64EOCD, u64)> {
        let Some(locator_offset) = eocd_offset.checked_sub(Zip64EOCDLocator::SIZE as u64) else {
            bail!("Missing ZIP64 End of Central Directory Locator");
        };
        let mut locator_buf = vec![0u8; Zip64EOCDLocator::SIZE];
        self.reader
            .read_at(locator_offset, &mut locator_buf)
            .await?;

        let locator = Zip64EOCDLocator::from_bytes(&locator_buf)?;

        if locator.eocd64_offset.saturating_add(Zip64EOCD::MIN_SIZE as u64) > locator_offset {
            bail!("ZIP64 End of Central Directory out of bounds");
        }
        let mut eocd64_buf = vec![0u8; Zip64EOCD::MIN_SIZE];
        self.reader
            .read_at(locator.eocd64_offset, &mut eocd64_buf)
            .await?;

        let eocd64 = Zip64EOCD::from_bytes(&eocd64_buf)?;
        Ok((eocd64, locator.eocd64_offset))
    }

    /// List every entry of the archive in Central Directory order.
    pub async fn list_entries(&self) -> Result<Vec<ArchiveEntry>> {
        let (eocd, eocd_offset) = self.find_eocd().await?;

        // Get Central Directory info, using ZIP64 if needed
        let zip64 = eocd.is_zip64();
        let (cd_offset, cd_size, total_entries, directory_end) = if zip64 {
            let (eocd64, eocd64_offset) = self.read_zip64_eocd(eocd_offset).await?;
            (
                eocd64.cd_offset,
                eocd64.cd_size,
                eocd64.total_entries,
                eocd64_offset,
            )
        } else {
            (
                eocd.cd_offset as u64,
                eocd.cd_size as u64,
                eocd.total_entries as u64,
                eocd_offset,
            )
        };

        // The directory ends where the EOCD starts. Any gap left before
        // cd_offset is a prefix (e.g. a self-extractor stub).
        let Some(base_offset) = directory_end
            .checked_sub(cd_size)
            .and_then(|start| start.checked_sub(cd_offset))
        else {
            bail!("Central Directory out of bounds");
        };

        // Read the entire Central Directory in one go
        let mut cd_data = vec![0u8; cd_size as usize];
        self.reader
            .read_at(base_offset + cd_offset, &mut cd_data)
            .await?;

        let capacity = total_entries.min(cd_size / CDFH_MIN_SIZE as u64);
        let mut entries = Vec::with_capacity(capacity as usize);
        let mut cursor = Cursor::new(cd_data.as_slice());

        // The 16-bit entry count wraps past 65535, so walk headers until
        // the directory is used up instead of trusting it.
        while cd_data
            .get(cursor.position() as usize..)
            .is_some_and(|rest| rest.starts_with(CDFH_SIGNATURE))
        {
            entries.push(parse_cdfh(&mut cursor)?);
        }

        let found = entries.len() as u64;
        let consistent = if zip64 {
            found == total_entries
        } else {
            found % 0x1_0000 == total_entries
        };
        if !consistent {
            bail!("Central Directory lists {total_entries} entries, found {found}");
        }

        Ok(entries)
    }
}

/// Parse a Central Directory File Header from a cursor.
fn parse_cdfh(cursor: &mut Cursor<&[u8]>) -> Result<ArchiveEntry> {
    // Read and verify the signature (PK\x01\x02)
    let mut sig = [0u8; 4];
    cursor.read_exact(&mut sig)?;
    if sig != CDFH_SIGNATURE {
        bail!("Invalid Central Directory File Header");
    }

    let _version_made_by = cursor.read_u16::<LittleEndian>()?;
    let _version_needed = cursor.read_u16::<LittleEndian>()?;
    let _flags = cursor.read_u16::<LittleEndian>()?;
    let _compression_method = cursor.read_u16::<LittleEndian>()?;
    let _last_mod_time = cursor.read_u16::<LittleEndian>()?;
    let _last_mod_date = cursor.read_u16::<LittleEndian>()?;
    let _crc32 = cursor.read_u32::<LittleEndian>()?;
    let _compressed_size = cursor.read_u32::<LittleEndian>()?;
    let mut uncompressed_size = cursor.read_u32::<LittleEndian>()? as u64;
    let file_name_length = cursor.read_u16::<LittleEndian>()?;
    let extra_field_length = cursor.read_u16::<LittleEndian>()?;
    let file_comment_length = cursor.read_u16::<LittleEndian>()?;
    let _disk_number_start = cursor.read_u16::<LittleEndian>()?;
    let _internal_attrs = cursor.read_u16::<LittleEndian>()?;
    let _external_attrs = cursor.read_u32::<LittleEndian>()?;
    let _lfh_offset = cursor.read_u32::<LittleEndian>()?;

    let mut file_name_bytes = vec![0u8; file_name_length as usize];
    cursor.read_exact(&mut file_name_bytes)?;
    let name = String::from_utf8_lossy(&file_name_bytes).into_owned();

    let extra_field_end = cursor.position() + extra_field_length as u64;
    if extra_field_end > cursor.get_ref().len() as u64 {
        bail!("Truncated extra field for entry {name}");
    }

    while cursor.position() + 4 <= extra_field_end {
        let header_id = cursor.read_u16::<LittleEndian>()?;
        let field_size = cursor.read_u16::<LittleEndian>()?;
        let field_end = (cursor.position() + field_size as u64).min(extra_field_end);

        if header_id == ZIP64_EXTRA_FIELD_ID {
            // The uncompressed size comes first, and only if saturated
            if uncompressed_size == 0xFFFFFFFF && cursor.position() + 8 <= field_end {
                uncompressed_size = cursor.read_u64::<LittleEndian>()?;
            }
        }
        cursor.set_position(field_end);
    }

    // Skip the rest of the extra field and the file comment
    let next_header = extra_field_end + file_comment_length as u64;
    if next_header > cursor.get_ref().len() as u64 {
        bail!("Truncated comment for entry {name}");
    }
    cursor.set_position(next_header);

    Ok(ArchiveEntry {
        name,
        uncompressed_size,
    })
}
