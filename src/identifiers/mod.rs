/*! Language identification.

The license engine treats language identification as an opaque
collaborator: it receives the extracted text, returns an
[identification::Identification] (or [None] when no reliable prediction
exists) and has no effect on license resolution.
!*/
pub mod fasttext;
pub mod identification;

pub use fasttext::FastText;
pub use identification::Identification;

use crate::error::Error;

/// Identifier trait: implemented by every language identification model
/// usable in pipelines.
pub trait Identifier {
    fn identify(&self, text: &str) -> Result<Option<Identification>, Error>;
}
