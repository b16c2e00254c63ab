//! Types used by the ccdoc pipeline.
mod document;

pub use document::{Document, Metadata, WarcHeaders};
