/*! License mention extraction and resolution.

Given a document's raw markup, finds every Creative Commons license
reference (meta tags, JSON-LD, link tags, anchors), normalizes each into a
canonical `(family, version)` pair and deterministically resolves one
best-guess license per document.

The stages are pure with respect to each other's output:

```text
markup -> dom -> scanner (classify per node) -> normalize -> resolve -> record
```

[annotate_html] chains them, folding adapter failure into the record:

```
use shelob::license::annotate_html;

let record = annotate_html(
    r#"<html><head><link rel="license"
        href="https://creativecommons.org/licenses/by/4.0/"></head></html>"#,
);
assert_eq!(record.license_abbr.to_string(), "by");
```
!*/
pub mod classify;
pub mod dom;
pub mod normalize;
pub mod record;
pub mod resolve;
pub mod scanner;
pub mod types;

pub use dom::HtmlTree;
pub use record::{LicenseRecord, PotentialLicenses};
pub use scanner::find_licenses;
pub use types::{LicenseAbbr, LicenseLocation, LicenseMention};

/// Run the whole engine on raw markup.
///
/// Never fails: unparseable input yields a record with
/// `license_parse_error` set and empty potential licenses.
pub fn annotate_html(raw: &str) -> LicenseRecord {
    match HtmlTree::parse(raw) {
        Ok(tree) => LicenseRecord::assemble(find_licenses(&tree)),
        Err(_) => LicenseRecord::parse_failure(),
    }
}
