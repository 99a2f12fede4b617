//! The older folder/file hash archive (`"BSA\0"`, versions 103-105) and its
//! Morrowind-era ancestor (magic `0x00000100`).
//!
//! The two-pass folder-then-file record structure, the 8-byte name hash
//! record, and the 16-byte folder/file record sizes are grounded on the
//! TES4 reference parser in the retrieval pack (`Ryan-rsm-McKenzie`'s
//! `bsa/tes4.rs`); the archive-level flag bit values (`0x0100` for embedded
//! full names, `0x40000000` as the default-compressed bit, inverted per
//! file by the top bit of that file's size field) are the spec's own.

use std::path::PathBuf;

use crate::error::ArchiveError;
use crate::util::byte_reader::ByteReader;

use super::{ArchiveType, FileInfo};

const HEADER_SIZE: usize = 36;
const FOLDER_RECORD_SIZE: usize = 16;
const FILE_RECORD_SIZE: usize = 16;

const FLAG_EMBEDDED_NAMES: u32 = 0x0100;
const FLAG_COMPRESSED_DEFAULT: u32 = 0x4000_0000;
const FILE_SIZE_INVERT_COMPRESSION: u32 = 1 << 30;
const FILE_SIZE_MASK: u32 = !FILE_SIZE_INVERT_COMPRESSION;

pub fn parse_oblivion(data: &[u8]) -> Result<Vec<(String, FileInfo)>, ArchiveError> {
    let mut r = ByteReader::new(data);
    r.skip(4); // "BSA\0"
    let version = r.read_u32().ok_or(ArchiveError::Truncated { expected: 8, found: data.len() })?;
    if !matches!(version, 103 | 104 | 105) {
        return Err(ArchiveError::UnsupportedVersion(version));
    }
    let header_size = r.read_u32().ok_or(ArchiveError::Truncated { expected: 12, found: data.len() })?;
    let archive_flags = r.read_u32().ok_or(ArchiveError::Truncated { expected: 16, found: data.len() })?;
    let folder_count = r.read_u32().ok_or(ArchiveError::Truncated { expected: 20, found: data.len() })?;
    let file_count = r.read_u32().ok_or(ArchiveError::Truncated { expected: 24, found: data.len() })?;
    let _folder_names_len = r.read_u32().ok_or(ArchiveError::Truncated { expected: 28, found: data.len() })?;
    let file_names_len = r.read_u32().ok_or(ArchiveError::Truncated { expected: 32, found: data.len() })?;
    let _archive_types = r.read_u16().ok_or(ArchiveError::Truncated { expected: 34, found: data.len() })?;
    let _padding = r.read_u16().ok_or(ArchiveError::Truncated { expected: 36, found: data.len() })?;

    let embedded_names = archive_flags & FLAG_EMBEDDED_NAMES != 0;
    let compressed_default = archive_flags & FLAG_COMPRESSED_DEFAULT != 0;

    r.seek(header_size as usize);

    struct FolderEntry {
        file_count: u32,
    }
    let mut folders = Vec::with_capacity(folder_count as usize);
    for _ in 0..folder_count {
        r.skip(8); // folder name hash
        let count = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _offset = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        folders.push(FolderEntry { file_count: count });
    }
    if (folders.len() as u64) * FOLDER_RECORD_SIZE as u64 > data.len() as u64 {
        // already caught above by soft reads, kept for documentation
    }

    let mut raw_files: Vec<(String, u64, u32)> = Vec::with_capacity(file_count as usize);
    for folder in &folders {
        let folder_name = if embedded_names {
            let len = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })? as usize;
            let name = r.read_string(len).ok_or(ArchiveError::Truncated { expected: len, found: r.remaining() })?;
            name
        } else {
            String::new()
        };
        for _ in 0..folder.file_count {
            r.skip(8); // file name hash
            let size_field = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
            let offset = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
            raw_files.push((folder_name.clone(), offset as u64, size_field));
        }
    }

    let mut file_names = Vec::with_capacity(file_count as usize);
    if embedded_names {
        let start = r.position();
        let end = (start + file_names_len as usize).min(data.len());
        let mut nr = ByteReader::new(&data[start..end]);
        for _ in 0..file_count {
            match nr.read_cstr() {
                Some(s) => file_names.push(s),
                None => break,
            }
        }
    }

    let mut out = Vec::with_capacity(raw_files.len());
    for (i, (folder_name, offset, size_field)) in raw_files.into_iter().enumerate() {
        let compressed = compressed_default ^ (size_field & FILE_SIZE_INVERT_COMPRESSION != 0);
        let stored_size = size_field & FILE_SIZE_MASK;

        // When compressed, the payload is prefixed by a 4-byte uncompressed
        // size; the on-disk size field counts that prefix too.
        let (data_offset, packed_size, unpacked_size) = if compressed {
            let mut pr = ByteReader::new(data.get(offset as usize..).unwrap_or(&[]));
            let real_unpacked = pr.read_u32().unwrap_or(0);
            (offset + 4, (stored_size as u64).saturating_sub(4), real_unpacked as u64)
        } else {
            (offset, 0u64, stored_size as u64)
        };

        let name = file_names.get(i).cloned().unwrap_or_else(|| format!("__unnamed_{i}"));
        let full_path = if folder_name.is_empty() { name } else { format!("{folder_name}/{name}") };

        out.push((
            full_path,
            FileInfo {
                archive_index: usize::MAX,
                archive_type: ArchiveType::OblivionFolder { version, compressed },
                offset: data_offset,
                packed_size,
                unpacked_size,
                texture: None,
                loose_path: None::<PathBuf>,
            },
        ));
    }
    Ok(out)
}

/// The Morrowind-era archive: a 12-byte header (magic, hash table offset,
/// file count), a file size/offset table, a file-name-offset table, a
/// concatenated NUL-terminated name block, and a trailing hash table (not
/// needed for extraction). Never compressed.
pub fn parse_morrowind(data: &[u8]) -> Result<Vec<(String, FileInfo)>, ArchiveError> {
    let mut r = ByteReader::new(data);
    let magic = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: data.len() })?;
    if magic != 0x100 {
        return Err(ArchiveError::InvalidHeader(format!("bad Morrowind BSA magic {magic:#x}")));
    }
    let hash_offset = r.read_u32().ok_or(ArchiveError::Truncated { expected: 8, found: data.len() })?;
    let file_count = r.read_u32().ok_or(ArchiveError::Truncated { expected: 12, found: data.len() })? as usize;

    let mut sizes = Vec::with_capacity(file_count);
    let mut offsets = Vec::with_capacity(file_count);
    for _ in 0..file_count {
        let size = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let offset = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        sizes.push(size);
        offsets.push(offset);
    }
    let mut name_offsets = Vec::with_capacity(file_count);
    for _ in 0..file_count {
        name_offsets
            .push(r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?);
    }
    let names_start = r.position();
    // Data begins right after the hash table that follows the name block;
    // `hash_offset` is relative to the start of the name block.
    let data_start = names_start + hash_offset as usize - (file_count * 8);

    let mut out = Vec::with_capacity(file_count);
    for i in 0..file_count {
        let name_pos = names_start + name_offsets[i] as usize;
        let mut nr = ByteReader::new(data.get(name_pos..).unwrap_or(&[]));
        let name = nr.read_cstr().unwrap_or_else(|| format!("__unnamed_{i}"));
        out.push((
            name,
            FileInfo {
                archive_index: usize::MAX,
                archive_type: ArchiveType::MorrowindFolder,
                offset: (data_start as u64).saturating_add(offsets[i] as u64),
                packed_size: 0,
                unpacked_size: sizes[i] as u64,
                texture: None,
                loose_path: None::<PathBuf>,
            },
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_archive(folder: &str, files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"BSA\0");
        out.extend_from_slice(&103u32.to_le_bytes());
        out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&FLAG_EMBEDDED_NAMES.to_le_bytes());
        out.extend_from_slice(&1u32.to_le_bytes()); // folder_count
        out.extend_from_slice(&(files.len() as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // folder_names_len (unused)
        let file_names_total: usize = files.iter().map(|(n, _)| n.len() + 1).sum();
        out.extend_from_slice(&(file_names_total as u32).to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes()); // archive_types
        out.extend_from_slice(&0u16.to_le_bytes()); // padding
        assert_eq!(out.len(), HEADER_SIZE);

        // folder record
        out.extend_from_slice(&0u64.to_le_bytes()); // folder hash
        out.extend_from_slice(&(files.len() as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // offset (unused by parser)

        // folder name (length-prefixed)
        out.push(folder.len() as u8);
        out.extend_from_slice(folder.as_bytes());

        let header_and_tables_end = out.len()
            + files.len() * FILE_RECORD_SIZE
            + file_names_total;
        let mut offset = header_and_tables_end as u64;
        for (_, body) in files {
            out.extend_from_slice(&0u64.to_le_bytes()); // file name hash
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(&offset.to_le_bytes());
            offset += body.len() as u64;
        }
        for (name, _) in files {
            out.extend_from_slice(name.as_bytes());
            out.push(0);
        }
        for (_, body) in files {
            out.extend_from_slice(body);
        }
        out
    }

    #[test]
    fn parses_folder_and_file_records() {
        let archive = build_archive("meshes", &[("rock.nif", b"hello")]);
        let entries = parse_oblivion(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "meshes/rock.nif");
        assert_eq!(entries[0].1.unpacked_size, 5);
        assert!(!matches!(&entries[0].1.archive_type, ArchiveType::OblivionFolder { compressed: true, .. }));
    }

    #[test]
    fn rejects_unsupported_version() {
        let mut archive = build_archive("meshes", &[("a.nif", b"x")]);
        archive[4..8].copy_from_slice(&999u32.to_le_bytes());
        assert!(matches!(parse_oblivion(&archive), Err(ArchiveError::UnsupportedVersion(999))));
    }
}
