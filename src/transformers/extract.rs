/*! HTML to plain-text content transform.

Applied after license annotation: the annotator needs the original markup,
downstream consumers (language identification, corpus output) need text.
Unparseable content is left untouched.
!*/
use crate::license::HtmlTree;
use crate::pipelines::ccdoc::types::Document;

use super::transform::Transform;

#[derive(Default)]
pub struct TextExtract;

impl Transform for TextExtract {
    fn transform_own(&self, mut doc: Document) -> Document {
        if let Ok(tree) = HtmlTree::parse(doc.content()) {
            doc.set_content(tree.text());
        }
        doc
    }
}
