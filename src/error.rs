use thiserror::Error;

/// Errors that abort a single archive mount. Previously mounted archives are
/// unaffected — `ArchiveIndex::mount` only merges a new archive's file table
/// in after the whole thing parses cleanly.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("invalid archive header: {0}")]
    InvalidHeader(String),
    #[error("unsupported archive version {0}")]
    UnsupportedVersion(u32),
    #[error("truncated archive: expected at least {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("record at offset {offset} (size {size}) exceeds archive bounds ({len})")]
    OutOfBounds { offset: u64, size: u64, len: usize },
    #[error("decompressor produced {actual} bytes, expected {expected}")]
    DecompressSizeMismatch { expected: usize, actual: usize },
    #[error("unsupported compression codec {0}")]
    UnsupportedCodec(u32),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding the reflection stream / component database.
///
/// Most of these cause the *current file* to be abandoned rather than
/// propagated — see [`crate::cdb::ComponentDatabase::load`] — corruption
/// tolerance is a design goal, not an oversight.
#[derive(Debug, Error)]
pub enum CdbError {
    #[error("not a reflection stream (bad \"BETH\" magic)")]
    BadMagic,
    #[error("unsupported stream version {0}")]
    UnsupportedVersion(u32),
    #[error("chunk truncated: wanted {wanted} bytes, {available} available")]
    Truncated { wanted: usize, available: usize },
    #[error("class {0} has an incompatible field count")]
    SchemaMismatch(String),
    #[error("edge source object already has a parent")]
    DuplicateParent,
}
