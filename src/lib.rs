//! Reads Creation Engine 2 (Starfield-era) archive containers and material
//! component databases into a navigable, strongly typed model, without
//! depending on the game's own runtime.
//!
//! Layered roughly the way the source separates its own concerns:
//! [`archive`] mounts BA2/BSA containers and loose directories behind one
//! lookup surface (L0/L1); [`reflection`] decodes the `"BETH"`-framed
//! stream every `.cdb`/`.mat` file is written in (L2); [`cdb`] assembles
//! those streams into a queryable object forest with inheritance (L3a) and
//! projects it into a typed [`cdb::project::CE2Material`] view; [`json`]
//! reads and writes the hand-authored JSON dialect the same data round-trips
//! through (L3b).

pub mod archive;
pub mod cdb;
pub mod error;
pub mod json;
pub mod reflection;
pub mod resource_id;
pub mod util;

pub use error::{ArchiveError, CdbError};
pub use resource_id::ResourceId;
