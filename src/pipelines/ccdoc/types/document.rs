//! Annotated document type.
use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use warc::WarcHeader;

use crate::containment::Containment;
use crate::identifiers::Identification;
use crate::license::LicenseRecord;

pub type WarcHeaders = HashMap<WarcHeader, Vec<u8>>;
pub type WarcHeadersSer = HashMap<WarcHeader, String>;

/// Shelob-specific metadata: language identification, license record and
/// reference corpus containment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Metadata {
    identification: Option<Identification>,
    #[serde(flatten)]
    license: LicenseRecord,
    in_reference_corpus: Containment,
}

impl Metadata {
    pub fn new(
        identification: Option<Identification>,
        license: LicenseRecord,
        in_reference_corpus: Containment,
    ) -> Self {
        Metadata {
            identification,
            license,
            in_reference_corpus,
        }
    }

    pub fn identification(&self) -> Option<&Identification> {
        self.identification.as_ref()
    }

    pub fn set_identification(&mut self, identification: Option<Identification>) {
        self.identification = identification;
    }

    pub fn license(&self) -> &LicenseRecord {
        &self.license
    }

    pub fn set_license(&mut self, license: LicenseRecord) {
        self.license = license;
    }

    pub fn in_reference_corpus(&self) -> Containment {
        self.in_reference_corpus
    }

    pub fn set_in_reference_corpus(&mut self, containment: Containment) {
        self.in_reference_corpus = containment;
    }
}

/// A Document is a structure holding content, WARC headers and
/// shelob-specific metadata.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
#[serde(from = "DocumentSer", into = "DocumentSer")]
pub struct Document {
    content: String,
    warc_headers: WarcHeaders,
    metadata: Metadata,
}

/// Serializable version of [Document].
///
/// WARC header values are raw bytes in memory but strings on disk.
#[derive(Serialize, Deserialize)]
struct DocumentSer {
    content: String,
    warc_headers: WarcHeadersSer,
    metadata: Metadata,
}

impl From<Document> for DocumentSer {
    fn from(d: Document) -> Self {
        let warc_headers = d
            .warc_headers
            .into_iter()
            .map(|(k, v)| (k, String::from_utf8_lossy(&v).into_owned()))
            .collect();

        Self {
            content: d.content,
            warc_headers,
            metadata: d.metadata,
        }
    }
}

impl From<DocumentSer> for Document {
    fn from(d: DocumentSer) -> Self {
        let warc_headers = d
            .warc_headers
            .into_iter()
            .map(|(k, v)| (k, v.as_bytes().to_vec()))
            .collect();

        Self {
            content: d.content,
            warc_headers,
            metadata: d.metadata,
        }
    }
}

impl Document {
    pub fn new(content: String, warc_headers: WarcHeaders, metadata: Metadata) -> Self {
        Self {
            content,
            warc_headers,
            metadata,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn warc_headers(&self) -> &WarcHeaders {
        &self.warc_headers
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Shorthand to get the record id.
    pub fn warc_id(&self) -> String {
        String::from_utf8_lossy(
            self.warc_headers
                .get(&WarcHeader::RecordID)
                .map_or(&[][..], |id| id.as_slice()),
        )
        .into_owned()
    }

    /// Shorthand to get the target URI, if any.
    pub fn url(&self) -> Option<String> {
        self.warc_headers
            .get(&WarcHeader::TargetURI)
            .map(|uri| String::from_utf8_lossy(uri).into_owned())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("warc_id", &self.warc_id())
            .field("metadata", &self.metadata)
            .finish()
    }
}
