/*! License record assembly.

Aggregates a document's mentions into the flat record shape shipped in the
corpus. Field names are part of the output contract and must not change.
!*/
use serde::{Deserialize, Serialize};

use super::resolve;
use super::types::{LicenseAbbr, LicenseLocation, LicenseMention};

/// All mentions of a document, column-oriented (parallel sequences aligned
/// by index) so that downstream Arrow/Parquet consumers get homogeneous
/// lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PotentialLicenses {
    pub abbr: Vec<LicenseAbbr>,
    pub version: Vec<Option<String>>,
    pub location: Vec<LicenseLocation>,
    pub in_head: Vec<bool>,
    pub in_footer: Vec<bool>,
}

impl PotentialLicenses {
    pub fn len(&self) -> usize {
        self.abbr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbr.is_empty()
    }
}

impl From<&[LicenseMention]> for PotentialLicenses {
    fn from(mentions: &[LicenseMention]) -> Self {
        let mut columns = Self::default();
        for mention in mentions {
            columns.abbr.push(mention.abbr);
            columns.version.push(mention.version.clone());
            columns.location.push(mention.location);
            columns.in_head.push(mention.in_head);
            columns.in_footer.push(mention.in_footer);
        }
        columns
    }
}

/// Per-document license annotation record.
///
/// The `license_*` scalar fields come from the best-guess mention; when no
/// mention was found the abbreviation falls back to the `unknown` sentinel
/// and the remaining fields stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseRecord {
    pub license_abbr: LicenseAbbr,
    pub license_version: Option<String>,
    pub license_location: Option<LicenseLocation>,
    pub license_in_head: Option<bool>,
    pub license_in_footer: Option<bool>,
    pub potential_licenses: PotentialLicenses,
    pub license_parse_error: bool,
    pub license_disagreement: bool,
}

impl Default for LicenseRecord {
    fn default() -> Self {
        Self {
            license_abbr: LicenseAbbr::Unknown,
            license_version: None,
            license_location: None,
            license_in_head: None,
            license_in_footer: None,
            potential_licenses: PotentialLicenses::default(),
            license_parse_error: false,
            license_disagreement: false,
        }
    }
}

impl LicenseRecord {
    /// Assemble the record for a successfully parsed document.
    pub fn assemble(mentions: Vec<LicenseMention>) -> Self {
        let disagreement = resolve::disagreement(&mentions);

        match resolve::best(&mentions) {
            Some(best) => Self {
                license_abbr: best.abbr,
                license_version: best.version.clone(),
                license_location: Some(best.location),
                license_in_head: Some(best.in_head),
                license_in_footer: Some(best.in_footer),
                potential_licenses: PotentialLicenses::from(mentions.as_slice()),
                license_parse_error: false,
                license_disagreement: disagreement,
            },
            None => Self::default(),
        }
    }

    /// Record for a document whose markup could not be parsed. The
    /// document is kept, annotated as inconclusive.
    pub fn parse_failure() -> Self {
        Self {
            license_parse_error: true,
            ..Self::default()
        }
    }

    /// True iff a license mention was found.
    pub fn has_license(&self) -> bool {
        !self.potential_licenses.is_empty()
    }
}
