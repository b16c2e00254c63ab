/*! Creative Commons license annotator.

Runs the license engine over a [Document] whose content still holds the
raw markup, and stores the assembled record in the metadata. Parse
failures are annotated, never fatal: the document survives with
`license_parse_error` set.
!*/
use log::debug;

use crate::license;
use crate::pipelines::ccdoc::types::Document;

use super::Annotate;

#[derive(Default)]
pub struct LicenseAnnotator;

impl Annotate<Document> for LicenseAnnotator {
    fn annotate(&self, doc: &mut Document) {
        let record = license::annotate_html(doc.content());
        if record.license_parse_error {
            debug!(
                "{}: markup parse failure ({})",
                doc.warc_id(),
                doc.url().unwrap_or_default()
            );
        }
        doc.metadata_mut().set_license(record);
    }
}
