//! Content-addressable asset identity: `(dir_hash, file_hash, ext_code)`.
//!
//! This is independent of the archive index's own path hash (see
//! `archive::name_hash`) — it is the identity materials and their
//! components are keyed by inside the component database.

use std::fmt;

/// `mat\0` packed little-endian, lowercased: the extension code of every
/// material root object.
pub const EXT_CODE_MAT: u32 = 0x0074616D;

const fn build_crc32c_table() -> [u32; 256] {
    const POLY: u32 = 0x82F6_3B78;
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut j = 0;
        while j < 8 {
            c = if c & 1 != 0 { POLY ^ (c >> 1) } else { c >> 1 };
            j += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

/// Reflected CRC-32C (Castagnoli) table, byte-wise.
static CRC32C_TABLE: [u32; 256] = build_crc32c_table();

/// Byte-wise CRC-32C update, matching the spec's "seed 0xFFFFFFFF, table walk"
/// contract exactly (no final inversion).
fn crc32c_update(mut crc: u32, bytes: &[u8]) -> u32 {
    for &b in bytes {
        crc = (crc >> 8) ^ CRC32C_TABLE[((crc ^ b as u32) & 0xFF) as usize];
    }
    crc
}

fn crc32c(bytes: &[u8]) -> u32 { crc32c_update(0xFFFF_FFFF, bytes) }

/// `(dir_hash, file_hash, ext_code)` triple naming an asset independent of
/// path casing or separator style.
///
/// Totally ordered lexicographically by `(file_hash, ext_code, dir_hash)`
/// (the order the original layout's `operator<` uses), and field-wise equal.
#[derive(Clone, Copy, Eq)]
pub struct ResourceId {
    pub dir_hash: u32,
    pub file_hash: u32,
    pub ext_code: u32,
}

impl ResourceId {
    pub const fn new(dir_hash: u32, file_hash: u32, ext_code: u32) -> Self {
        Self { dir_hash, file_hash, ext_code }
    }

    /// `true` for the all-zero id — never a valid resource.
    pub fn is_nil(&self) -> bool { self.dir_hash | self.file_hash | self.ext_code == 0 }

    pub fn is_material(&self) -> bool { self.ext_code == EXT_CODE_MAT }

    /// Builds an id from a path, exactly matching the archive's own path
    /// splitting rules: directory up to the last `/` or `\`, extension from
    /// the last `.` that falls after the basename start.
    ///
    /// A leading `data/` or `data\` (case-insensitive) is stripped first,
    /// matching `BSResourceID::fromJSONString`'s prefix check — every path
    /// under the game's installed data root hashes the same whether or not
    /// the caller includes that root.
    pub fn from_path(path: &str) -> Self {
        let path = strip_data_prefix(path);
        let bytes = path.as_bytes();
        let slash = path.rfind('/');
        let backslash = path.rfind('\\');
        let mut base_start = match (slash, backslash) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        let mut ext_pos = path.rfind('.');
        if let Some(e) = ext_pos {
            if let Some(b) = base_start {
                if e < b {
                    ext_pos = None;
                }
            }
        }
        let ext_pos = ext_pos.unwrap_or(bytes.len());

        // Directory hash: lowercase, `/` -> `\`, no trailing separator.
        let mut dir_crc = 0xFFFF_FFFFu32;
        let mut i = 0usize;
        if let Some(b) = base_start.take() {
            while i < b {
                let mut c = bytes[i];
                if c.is_ascii_uppercase() {
                    c |= 0x20;
                } else if c == b'/' {
                    c = b'\\';
                }
                dir_crc = (dir_crc >> 8) ^ CRC32C_TABLE[((dir_crc ^ c as u32) & 0xFF) as usize];
                i += 1;
            }
            i += 1; // skip the separator itself
        }
        let dir_hash = dir_crc;

        // Basename hash (no extension), lowercased.
        let mut file_crc = 0xFFFF_FFFFu32;
        while i < ext_pos {
            let mut c = bytes[i];
            if c.is_ascii_uppercase() {
                c |= 0x20;
            }
            file_crc = (file_crc >> 8) ^ CRC32C_TABLE[((file_crc ^ c as u32) & 0xFF) as usize];
            i += 1;
        }
        let file_hash = file_crc;

        // Extension code: packed little-endian, up to 4 bytes, lowercased.
        let ext_len = bytes.len().saturating_sub(ext_pos);
        let ext_code = match ext_len {
            0 | 1 => 0u32,
            2 => bytes[ext_pos + 1] as u32,
            3 => u16::from_le_bytes([bytes[ext_pos + 1], bytes[ext_pos + 2]]) as u32,
            4 => {
                let word = u32::from_le_bytes([
                    bytes[ext_pos],
                    bytes[ext_pos + 1],
                    bytes[ext_pos + 2],
                    bytes[ext_pos + 3],
                ]);
                word >> 8
            }
            _ => u32::from_le_bytes([
                bytes[ext_pos + 1],
                bytes[ext_pos + 2],
                bytes[ext_pos + 3],
                bytes[ext_pos + 4],
            ]),
        };
        let ext_code = ext_code | ((ext_code >> 1) & 0x2020_2020);

        Self { dir_hash, file_hash, ext_code }
    }

    /// Parses the `"res:DDDDDDDD:FFFFFFFF:EEEEEEEE"` string form (30 chars,
    /// hex, colon-separated).
    pub fn from_res_string(s: &str) -> Option<Self> {
        let s = s.as_bytes();
        if s.len() != 30 || s[12] != b':' || s[21] != b':' {
            return None;
        }
        if !s[0..4].eq_ignore_ascii_case(b"res:") {
            return None;
        }
        let dir_hash = u32::from_str_radix(std::str::from_utf8(&s[4..12]).ok()?, 16).ok()?;
        let file_hash = u32::from_str_radix(std::str::from_utf8(&s[13..21]).ok()?, 16).ok()?;
        let ext_code = u32::from_str_radix(std::str::from_utf8(&s[22..30]).ok()?, 16).ok()?;
        Some(Self { dir_hash, file_hash, ext_code })
    }

    pub fn to_res_string(self) -> String {
        format!("res:{:08X}:{:08X}:{:08X}", self.dir_hash, self.file_hash, self.ext_code)
    }
}

impl PartialEq for ResourceId {
    fn eq(&self, other: &Self) -> bool {
        self.file_hash == other.file_hash
            && self.ext_code == other.ext_code
            && self.dir_hash == other.dir_hash
    }
}

impl std::hash::Hash for ResourceId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.file_hash.hash(state);
        self.ext_code.hash(state);
        self.dir_hash.hash(state);
    }
}

impl Ord for ResourceId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.file_hash, self.ext_code, self.dir_hash).cmp(&(
            other.file_hash,
            other.ext_code,
            other.dir_hash,
        ))
    }
}

impl PartialOrd for ResourceId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({})", self.to_res_string())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_res_string())
    }
}

/// Strips a leading `data/` or `data\` (case-insensitive) directory root,
/// if present, so that callers can pass either an absolute-from-data-root
/// or data-root-relative path interchangeably.
fn strip_data_prefix(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() > 5 && bytes[0..4].eq_ignore_ascii_case(b"data") && matches!(bytes[4], b'/' | b'\\') {
        &path[5..]
    } else {
        path
    }
}

/// Normalizes a path the way `ResourceId::from_path` implicitly does:
/// backslashes to slashes, ASCII lowercased, and a leading `data/` stripped.
/// Exposed so callers (and the path-hash-law test) can assert equivalence
/// across separator/case/prefix variation explicitly.
pub fn normalize_path(path: &str) -> String {
    let mut s = path.replace('\\', "/").to_ascii_lowercase();
    if let Some(rest) = s.strip_prefix("data/") {
        s = rest.to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ext_code_mat() {
        let id = ResourceId::from_path("materials/foo/bar.mat");
        assert_eq!(id.ext_code, EXT_CODE_MAT);
    }

    #[test]
    fn file_hash_matches_raw_crc32c() {
        let id = ResourceId::from_path("materials/foo/bar.mat");
        assert_eq!(id.file_hash, crc32c(b"bar"));
    }

    #[test]
    fn path_hash_laws_case_and_separator() {
        let a = ResourceId::from_path("materials/foo/bar.mat");
        let b = ResourceId::from_path(r"MATERIALS\FOO\BAR.MAT");
        let c = ResourceId::from_path("data/materials/foo/bar.mat");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn res_string_round_trip() {
        let id = ResourceId::from_path("materials/foo/bar.mat");
        let s = id.to_res_string();
        assert_eq!(ResourceId::from_res_string(&s), Some(id));
    }

    #[test]
    fn ordering_is_lexicographic_by_file_ext_dir() {
        let a = ResourceId::new(1, 5, 9);
        let b = ResourceId::new(2, 5, 9);
        let c = ResourceId::new(1, 6, 9);
        assert!(a < c);
        assert!(a < b); // same file/ext, dir differs
        let d = ResourceId::new(1, 5, 10);
        assert!(a < d);
    }

    #[test]
    fn no_extension_is_zero() {
        let id = ResourceId::from_path("materials/foo/bar");
        assert_eq!(id.ext_code, 0);
    }

    #[test]
    fn short_extensions() {
        let one = ResourceId::from_path("a/b.a");
        assert_eq!(one.ext_code, b'a' as u32);
        let two = ResourceId::from_path("a/b.ab");
        assert_eq!(two.ext_code, u16::from_le_bytes([b'a', b'b']) as u32);
    }

    #[test]
    fn long_extension_is_truncated_to_four_bytes() {
        let id = ResourceId::from_path("a/b.materials");
        let expected = u32::from_le_bytes([b'm', b'a', b't', b'e']);
        assert_eq!(id.ext_code, expected);
    }
}
