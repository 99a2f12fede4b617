//! Textured BA2 archives (`"BTDX"` + `"DX10"`): each entry is a texture,
//! stored as a header record (format/dimensions/mip count) followed by a
//! run of per-mip-range chunk records. No DDS header is ever stored on
//! disk — [`super::ArchiveIndex::extract_texture`] synthesizes one from
//! this metadata at extract time.
//!
//! Record layout grounded on the same Fallout 4 BA2 reference parser as
//! [`super::general`]; the "+1 on version marks LZ4-raw chunk payloads"
//! rule and the 25/33/37-byte header sizing are the spec's own.

use std::path::PathBuf;

use crate::error::ArchiveError;
use crate::util::byte_reader::ByteReader;
use crate::util::dds::TextureFormat;

use super::{ArchiveType, FileInfo, TextureChunk, TextureRecord};

const HEADER_RECORD_SIZE: usize = 24;
const CHUNK_RECORD_SIZE: usize = 24;

pub fn parse(data: &[u8]) -> Result<Vec<(String, FileInfo)>, ArchiveError> {
    let mut r = ByteReader::new(data);
    r.skip(4); // "BTDX"
    let raw_version = r.read_u32().ok_or(ArchiveError::Truncated { expected: 8, found: data.len() })?;
    r.skip(4); // "DX10"
    let file_count = r.read_u32().ok_or(ArchiveError::Truncated { expected: 16, found: data.len() })?;
    let name_table_offset = r.read_u64().ok_or(ArchiveError::Truncated { expected: 24, found: data.len() })?;

    // The low bit marks LZ4-raw chunk bodies instead of zlib; the rest of
    // the value is the ordinary format revision.
    let lz4_chunks = raw_version & 1 != 0;
    let version = raw_version >> 1;
    let header_size: usize = match version {
        0 => 25,
        1 => 33,
        _ => 37,
    };
    if version >= 1 {
        r.skip(header_size - 24);
    }

    let names = super_read_name_table(data, name_table_offset as usize, file_count as usize);

    r.seek(header_size);
    let mut out = Vec::with_capacity(file_count as usize);
    for i in 0..file_count as usize {
        let _name_hash = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _ext = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _dir_hash = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
        let _unknown = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })?;
        let num_chunks = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })?;
        let _chunk_header_size = r.read_u16().ok_or(ArchiveError::Truncated { expected: 2, found: r.remaining() })?;
        let height = r.read_u16().ok_or(ArchiveError::Truncated { expected: 2, found: r.remaining() })?;
        let width = r.read_u16().ok_or(ArchiveError::Truncated { expected: 2, found: r.remaining() })?;
        let mip_count = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })?;
        let dxgi_format = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })?;
        let is_cube_map = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })? != 0;
        let _unknown2 = r.read_u8().ok_or(ArchiveError::Truncated { expected: 1, found: r.remaining() })?;

        let mut chunks = Vec::with_capacity(num_chunks as usize);
        let mut first_offset = u64::MAX;
        for _ in 0..num_chunks {
            let offset = r.read_u64().ok_or(ArchiveError::Truncated { expected: 8, found: r.remaining() })?;
            let packed_size = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
            let unpacked_size = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
            let mip_first = r.read_u16().ok_or(ArchiveError::Truncated { expected: 2, found: r.remaining() })?;
            let mip_last = r.read_u16().ok_or(ArchiveError::Truncated { expected: 2, found: r.remaining() })?;
            let _magic = r.read_u32().ok_or(ArchiveError::Truncated { expected: 4, found: r.remaining() })?;
            first_offset = first_offset.min(offset);
            chunks.push(TextureChunk { offset, packed_size, unpacked_size, mip_first, mip_last });
        }

        let total_unpacked: u64 = chunks.iter().map(|c| c.unpacked_size as u64).sum();
        let total_packed: u64 = chunks.iter().map(|c| c.packed_size as u64).sum();
        let path = names.get(i).cloned().unwrap_or_else(|| format!("__unnamed_{i}.dds"));
        out.push((
            path,
            FileInfo {
                archive_index: usize::MAX,
                archive_type: if lz4_chunks { ArchiveType::TextureLz4 } else { ArchiveType::TextureZlib },
                offset: if first_offset == u64::MAX { 0 } else { first_offset },
                packed_size: total_packed,
                unpacked_size: total_unpacked,
                texture: Some(TextureRecord {
                    format: TextureFormat(dxgi_format as u32),
                    width,
                    height,
                    mip_count,
                    is_cube_map,
                    chunks,
                }),
                loose_path: None::<PathBuf>,
            },
        ));
    }
    Ok(out)
}

fn super_read_name_table(data: &[u8], offset: usize, count: usize) -> Vec<String> {
    if offset == 0 || offset >= data.len() {
        return Vec::new();
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
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_archive(name: &str, mip_bodies: &[&[u8]]) -> Vec<u8> {
        let header_size = 25usize;
        let mut out = Vec::new();
        out.extend_from_slice(b"BTDX");
        out.extend_from_slice(&0u32.to_le_bytes()); // version 0, zlib chunks
        out.extend_from_slice(b"DX10");
        out.extend_from_slice(&1u32.to_le_bytes());
        let name_table_offset_pos = out.len();
        out.extend_from_slice(&0u64.to_le_bytes());
        out.push(0u8); // pad to 25-byte header
        assert_eq!(out.len(), header_size);

        let record_size = HEADER_RECORD_SIZE + mip_bodies.len() * CHUNK_RECORD_SIZE;
        // As in `general::build_archive`: the name table sits between the
        // record table and the chunk bodies, so it has to be skipped too.
        let name_table_size = 2 + name.len();
        let data_start = header_size + record_size + name_table_size;
        out.extend_from_slice(&0u32.to_le_bytes()); // name_hash
        out.extend_from_slice(&u32::from_le_bytes(*b"dds\0")); // ext
        out.extend_from_slice(&0u32.to_le_bytes()); // dir_hash
        out.push(0); // unknown
        out.push(mip_bodies.len() as u8); // num_chunks
        out.extend_from_slice(&24u16.to_le_bytes()); // chunk header size
        out.extend_from_slice(&4u16.to_le_bytes()); // height
        out.extend_from_slice(&4u16.to_le_bytes()); // width
        out.push(mip_bodies.len() as u8); // mip_count
        out.push(98); // BC7_UNORM
        out.push(0); // is_cube_map
        out.push(0); // unknown2

        let mut offset = data_start as u64;
        for (i, body) in mip_bodies.iter().enumerate() {
            out.extend_from_slice(&offset.to_le_bytes());
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(&(i as u16).to_le_bytes());
            out.extend_from_slice(&(i as u16).to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes());
            offset += body.len() as u64;
        }
        let name_table_offset = out.len() as u64;
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(name.as_bytes());
        for body in mip_bodies {
            out.extend_from_slice(body);
        }
        out[name_table_offset_pos..name_table_offset_pos + 8]
            .copy_from_slice(&name_table_offset.to_le_bytes());
        out
    }

    #[test]
    fn parses_texture_header_and_chunks() {
        let archive = build_archive("textures/rock.dds", &[b"abcd", b"ef"]);
        let entries = parse(&archive).unwrap();
        assert_eq!(entries.len(), 1);
        let (path, info) = &entries[0];
        assert_eq!(path, "textures/rock.dds");
        let tex = info.texture.as_ref().unwrap();
        assert_eq!(tex.format, TextureFormat::BC7_UNORM);
        assert_eq!(tex.chunks.len(), 2);
        assert_eq!(info.unpacked_size, 6);
    }
}
