//! The decompression collaborator, invoked as a black box:
//! `decompress(src, dst, unpacked_size) -> unpacked_size or error`.
//!
//! Codecs themselves (zlib, LZ4) are not reimplemented — we lean on the
//! same ecosystem crates `retrolib` (this crate's teacher's sibling
//! package) reaches for (`flate2`) plus the safe-decode build of
//! `lz4_flex` for the LZ4-raw texture chunk path.

use crate::error::ArchiveError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Codec {
    Zlib,
    Lz4Raw,
}

/// Decompresses `src` into a freshly allocated buffer of exactly
/// `unpacked_size` bytes. A codec that produces the wrong number of bytes
/// is a hard error — never silently truncated or padded.
pub fn decompress(codec: Codec, src: &[u8], unpacked_size: usize) -> Result<Vec<u8>, ArchiveError> {
    match codec {
        Codec::Zlib => decompress_zlib(src, unpacked_size),
        Codec::Lz4Raw => decompress_lz4_raw(src, unpacked_size),
    }
}

fn decompress_zlib(src: &[u8], unpacked_size: usize) -> Result<Vec<u8>, ArchiveError> {
    use std::io::Read;
    let mut out = Vec::with_capacity(unpacked_size);
    let mut decoder = flate2::read::ZlibDecoder::new(src);
    decoder.read_to_end(&mut out)?;
    if out.len() != unpacked_size {
        return Err(ArchiveError::DecompressSizeMismatch { expected: unpacked_size, actual: out.len() });
    }
    Ok(out)
}

fn decompress_lz4_raw(src: &[u8], unpacked_size: usize) -> Result<Vec<u8>, ArchiveError> {
    let out = lz4_flex::block::decompress(src, unpacked_size).map_err(|_| {
        ArchiveError::DecompressSizeMismatch { expected: unpacked_size, actual: 0 }
    })?;
    if out.len() != unpacked_size {
        return Err(ArchiveError::DecompressSizeMismatch { expected: unpacked_size, actual: out.len() });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zlib_round_trip() {
        use std::io::Write;
        let mut enc = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(b"hello world").unwrap();
        let packed = enc.finish().unwrap();
        let out = decompress(Codec::Zlib, &packed, 11).unwrap();
        assert_eq!(out, b"hello world");
    }

    #[test]
    fn zlib_size_mismatch_is_hard_error() {
        use std::io::Write;
        let mut enc = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(b"hello world").unwrap();
        let packed = enc.finish().unwrap();
        assert!(decompress(Codec::Zlib, &packed, 3).is_err());
    }

    #[test]
    fn lz4_raw_round_trip() {
        let packed = lz4_flex::block::compress(b"hello world");
        let out = decompress(Codec::Lz4Raw, &packed, 11).unwrap();
        assert_eq!(out, b"hello world");
    }
}
