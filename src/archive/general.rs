//! General BA2 archives (`"BTDX"` + `"GNRL"`): a flat table of file records,
//! each optionally zlib-compressed, named by directory/file hash plus a
//! four-character extension rather than a stored path string.
//!
//! Record layout grounded on the Fallout 4 BA2 reference parser in the
//! retrieval pack (`ozmorph-testract`'s `ba2/fallout4.rs`); header sizing
//! follows the spec's stated 24/32-byte split by version.

use std::path::PathBuf;

use crate::error::ArchiveError;
use crate::util::byte_reader::ByteReader;

use super::{ArchiveType, FileInfo};

const FILE_RECORD_SIZE: usize = 36;

pub fn parse(data: &[u8]) -> Result<Vec<(String, FileInfo)>, ArchiveError> {
    let mut r = ByteReader::new(data);
    r.skip(4); // "BTDX"
    let version = r.read_u32().ok_or(ArchiveError::Truncated { expected: 8, found: data.len() })?;
    r.skip(4); // "GNRL"
    let file_count = r.read_u32().ok_or(ArchiveError::Truncated { expected: 16, found: data.len() })?;
    let name_table_offset = r.read_u64().ok_or(ArchiveError::Truncated { expected: 24, found: data.len() })?;

    let header_size: usize = if version >= 2 { 32 } else { 24 };
    if version >= 2 {
        // Reserved/flags field the newer header variants carry; not needed
        // for extraction, only for advancing past it.
        r.skip(8);
    }
    if data.len() < header_size + file_count as usize * FILE_RECORD_SIZE {
        return Err(ArchiveError::Truncated {
            expected: header_size + file_count as usize * FILE_RECORD_SIZE,
            found: data.len(),
        });
    }

    let names = read_name_table(data, name_table_offset as usize, file_count as usize)?;

    r.seek(header_size);
    let mut out = Vec::with_capacity(file_count as usize);
    for i in 0..file_count as usize {
        let _name_hash = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let ext = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _dir_hash = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _unknown_flags = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let offset = r.read_u64().ok_or(ArchiveError::Truncated { expected: 8, found: r.remaining() })?;
        let compressed_size = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let uncompressed_size = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _magic = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;

        let path = names.get(i).cloned().unwrap_or_else(|| format!("__unnamed_{i}.{}", ext_to_str(ext)));
        let packed_size = if compressed_size == 0 { 0 } else { compressed_size as u64 };
        let archive_type =
            if compressed_size == 0 { ArchiveType::Uncompressed } else { ArchiveType::GeneralZlib };
        out.push((
            path,
            FileInfo {
                archive_index: usize::MAX,
                archive_type,
                offset,
                packed_size,
                unpacked_size: uncompressed_size as u64,
                texture: None,
                loose_path: None::<PathBuf>,
            },
        ));
    }
    Ok(out)
}

fn ext_to_str(ext: u32) -> String {
    String::from_utf8_lossy(&ext.to_le_bytes()).trim_end_matches('\0').to_string()
}

/// The name table, when present, is a sequence of `u16`-length-prefixed
/// strings, one per file record in the same order. Archives built without
/// full names (`name_table_offset == 0`) fall back to synthesized names.
fn read_name_table(data: &[u8], offset: usize, count: usize) -> Result<Vec<String>, ArchiveError> {
    if offset == 0 || offset >= data.len() {
        return Ok(Vec::new());
    }
    let mut r = ByteReader::new(&data[offset..]);
    let mut names = Vec::with_capacity(count);
    for _ in 0..count {
        let len = match r.read_u16() {
            Some(l) => l as usize,
            None => break,
        };
        match r.read_string(len) {
            Some(s) => names.push(s),
            None => break,
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_archive(names: &[&str], bodies: &[&[u8]]) -> Vec<u8> {
        let header_size = 24usize;
        let record_size = FILE_RECORD_SIZE;
        let mut out = Vec::new();
        out.extend_from_slice(b"BTDX");
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(b"GNRL");
        out.extend_from_slice(&(names.len() as u32).to_le_bytes());
        let name_table_offset_pos = out.len();
        out.extend_from_slice(&0u64.to_le_bytes());
        assert_eq!(out.len(), header_size);

        // The name table sits between the record table and the body data, so
        // the per-record `offset` field must skip past it too — not just the
        // header and records, or it would point into the name table instead
        // of the actual bytes.
        let name_table_size: usize = names.iter().map(|n| 2 + n.len()).sum();
        let data_start = header_size + names.len() * record_size + name_table_size;
        let mut offset = data_start as u64;
        for body in bodies {
            out.extend_from_slice(&0u32.to_le_bytes()); // name_hash
            out.extend_from_slice(&u32::from_le_bytes(*b"txt\0")); // ext
            out.extend_from_slice(&0u32.to_le_bytes()); // dir_hash
            out.extend_from_slice(&0u32.to_le_bytes()); // unknown flags
            out.extend_from_slice(&offset.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes()); // compressed_size (0 = uncompressed)
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes()); // magic
            offset += body.len() as u64;
        }
        let name_table_offset = out.len() as u64;
        for name in names {
            out.extend_from_slice(&(name.len() as u16).to_le_bytes());
            out.extend_from_slice(name.as_bytes());
        }
        for body in bodies {
            out.extend_from_slice(body);
        }
        out[name_table_offset_pos..name_table_offset_pos + 8]
            .copy_from_slice(&name_table_offset.to_le_bytes());
        out
    }

    #[test]
    fn parses_uncompressed_records_and_names() {
        let archive = build_archive(&["foo/bar.txt"], &[b"hello"]);
        let entries = parse(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "foo/bar.txt");
        assert_eq!(entries[0].1.unpacked_size, 5);
        assert_eq!(entries[0].1.packed_size, 0);
    }
}
