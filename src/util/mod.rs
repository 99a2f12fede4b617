pub mod byte_reader;
pub mod compression;
pub mod dds;
pub mod path;
