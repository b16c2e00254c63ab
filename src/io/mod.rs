//! I/O: per-language corpus writers.
mod langfiles;
pub mod writer;

pub use langfiles::LangFiles;
pub use writer::{DocWriter, WriterTrait};
