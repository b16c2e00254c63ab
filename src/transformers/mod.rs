/*! Document transformers.

Transforms documents by adding annotations or replacing content.

!*/

mod annotate;
mod extract;
mod license;
mod transform;

pub use annotate::{Annotate, Annotator};
pub use extract::TextExtract;
pub use license::LicenseAnnotator;
pub use transform::Transform;
