/*! Reference corpus containment lookup.

Read-only collaborator answering "is this document already part of the
known quality-filtered corpus?". The answer is merged into the output
record post hoc and never influences license resolution.
!*/
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tri-state lookup outcome.
///
/// `NotApplicable` covers documents the reference corpus cannot know
/// about: crawls newer than its coverage window, languages it ignores,
/// or languages it has no index for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Containment {
    Present,
    Absent,
    #[default]
    NotApplicable,
}

/// Read-only reference corpus lookup, keyed by language, crawl dump and
/// record id.
pub trait ReferenceCorpus {
    fn lookup(&self, lang: &str, dump: &str, record_uuid: &str) -> Containment;
}

/// Extract the bare uuid from a WARC record id of the form
/// `<urn:uuid:0ba93456-...>`.
pub fn record_uuid(record_id: &str) -> &str {
    record_id
        .trim_start_matches('<')
        .trim_end_matches('>')
        .rsplit(':')
        .next()
        .unwrap_or(record_id)
}

/// CSV-backed reference corpus index.
///
/// The index directory holds one `<lang>.csv` file per covered language,
/// rows of `dump,record-uuid`. Everything is loaded up-front; lookups are
/// plain set membership, shareable read-only across workers.
pub struct CsvCorpus {
    ids: HashMap<String, HashSet<(String, String)>>,
    /// Most recent dump covered by the corpus. Dump labels
    /// (`CC-MAIN-YYYY-WW`) order lexicographically.
    latest_dump: Option<String>,
    ignore_langs: HashSet<String>,
}

impl CsvCorpus {
    /// Load every `<lang>.csv` file under `dir`.
    pub fn from_dir(dir: &Path, ignore_langs: impl IntoIterator<Item = String>) -> Result<Self, Error> {
        let mut ids: HashMap<String, HashSet<(String, String)>> = HashMap::new();
        let mut latest_dump: Option<String> = None;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(lang) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("skipping reference index with unusable name: {path:?}");
                continue;
            };

            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(File::open(&path)?);
            let entries = ids.entry(lang.to_string()).or_default();
            for row in reader.records() {
                let row = row?;
                let (Some(dump), Some(uuid)) = (row.get(0), row.get(1)) else {
                    return Err(Error::Custom(format!(
                        "malformed reference index row in {path:?}: {row:?}"
                    )));
                };
                if latest_dump.as_deref() < Some(dump) {
                    latest_dump = Some(dump.to_string());
                }
                entries.insert((dump.to_string(), uuid.to_string()));
            }
            info!("[{}] reference index: {} entries", lang, entries.len());
        }

        Ok(Self {
            ids,
            latest_dump,
            ignore_langs: ignore_langs.into_iter().collect(),
        })
    }
}

impl ReferenceCorpus for CsvCorpus {
    fn lookup(&self, lang: &str, dump: &str, record_uuid: &str) -> Containment {
        if self.ignore_langs.contains(lang) {
            return Containment::NotApplicable;
        }
        // crawl newer than anything the corpus has seen
        if self.latest_dump.as_deref() < Some(dump) {
            return Containment::NotApplicable;
        }
        match self.ids.get(lang) {
            None => Containment::NotApplicable,
            Some(entries) => {
                if entries.contains(&(dump.to_string(), record_uuid.to_string())) {
                    Containment::Present
                } else {
                    Containment::Absent
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_record_uuid() {
        assert_eq!(
            record_uuid("<urn:uuid:0ba93456-62f1-4bfd-a246-6a0balabala>"),
            "0ba93456-62f1-4bfd-a246-6a0balabala"
        );
        assert_eq!(record_uuid("plain-id"), "plain-id");
    }

    fn corpus(ignore: &[&str]) -> (tempfile::TempDir, CsvCorpus) {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("en.csv")).unwrap();
        writeln!(f, "CC-MAIN-2023-40,aaaa-bbbb").unwrap();
        writeln!(f, "CC-MAIN-2024-10,cccc-dddd").unwrap();
        let c = CsvCorpus::from_dir(dir.path(), ignore.iter().map(|s| s.to_string())).unwrap();
        (dir, c)
    }

    #[test]
    fn test_present_absent() {
        let (_dir, corpus) = corpus(&[]);
        assert_eq!(
            corpus.lookup("en", "CC-MAIN-2023-40", "aaaa-bbbb"),
            Containment::Present
        );
        assert_eq!(
            corpus.lookup("en", "CC-MAIN-2023-40", "eeee-ffff"),
            Containment::Absent
        );
    }

    #[test]
    fn test_newer_dump_not_applicable() {
        let (_dir, corpus) = corpus(&[]);
        assert_eq!(
            corpus.lookup("en", "CC-MAIN-2025-05", "aaaa-bbbb"),
            Containment::NotApplicable
        );
    }

    #[test]
    fn test_unindexed_language_not_applicable() {
        let (_dir, corpus) = corpus(&[]);
        assert_eq!(
            corpus.lookup("fr", "CC-MAIN-2023-40", "aaaa-bbbb"),
            Containment::NotApplicable
        );
    }

    #[test]
    fn test_ignored_language_not_applicable() {
        let (_dir, corpus) = corpus(&["en"]);
        assert_eq!(
            corpus.lookup("en", "CC-MAIN-2023-40", "aaaa-bbbb"),
            Containment::NotApplicable
        );
    }
}
