//! CC license annotation pipeline.
//!
//! The CommonCrawl dump is composed of shards,
//! each shard is composed of WARC records,
//! each response record holds an HTTP exchange whose payload is markup.
//!
//! # Processing
//! 1. Each response record becomes a [Document] whose content is the raw
//!    HTML.
//! 1. The annotator chain runs the license engine over the markup and
//!    stores the resulting record in the metadata.
//! 1. The content is replaced by the extracted plain text.
//! 1. The text is language-identified.
//! 1. The reference corpus is consulted for containment.
//! 1. Documents are grouped by language and written as JSON lines.
//!
//! No step drops a document for being inconclusive: parse failures and
//! unidentified languages are annotated and kept.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use oxilangtag::LanguageTag;
use rayon::prelude::*;

use crate::containment::{record_uuid, Containment, CsvCorpus, ReferenceCorpus};
use crate::error::Error;
use crate::identifiers::{FastText, Identifier};
use crate::io::{LangFiles, WriterTrait};
use crate::pipelines::ccdoc::types::{Document, Metadata};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::commoncrawl::{self, Shard};
use crate::transformers::{Annotate, Annotator, LicenseAnnotator, TextExtract, Transform};

pub struct CcDoc {
    src: PathBuf,
    dst: PathBuf,
    lid_path: PathBuf,
    reference: Option<PathBuf>,
    dump: Option<String>,
    ignore_langs: Vec<String>,
}

impl CcDoc {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        lid_path: PathBuf,
        reference: Option<PathBuf>,
        dump: Option<String>,
        ignore_langs: Vec<String>,
    ) -> Self {
        if reference.is_none() {
            warn!("No reference corpus specified! Containment will be not_applicable.");
        }
        if dump.is_none() {
            warn!("No dump label specified! Containment will be not_applicable.");
        }
        Self {
            src,
            dst,
            lid_path,
            reference,
            dump,
            ignore_langs,
        }
    }

    /// List shard files in the source folder.
    fn get_paths(&self) -> Result<Vec<PathBuf>, Error> {
        let pattern = self.src.join("*.gz");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source path: {:?}", self.src)))?;
        let mut paths: Vec<PathBuf> = glob::glob(pattern)?.collect::<Result<_, _>>()?;
        // deterministic shard ordering regardless of filesystem
        paths.sort();
        Ok(paths)
    }

    /// Process a whole shard, returning its annotated documents.
    ///
    /// Invalid records are skipped and logged, never fatal to the shard.
    fn process_shard(
        shard_path: &Path,
        identifier: &FastText,
        annotator: &Annotator<Document>,
        corpus: Option<&CsvCorpus>,
        dump: Option<&str>,
    ) -> Result<Vec<Document>, Error> {
        info!("working on shard: {shard_path:?}");

        let shard = Shard::from_path_gzip(shard_path)?;

        let records: Vec<Document> = shard
            .iter_records()
            .filter_map(|record| match record {
                Ok(record) => Some(record),
                Err(e) => {
                    error!("{e:?}");
                    None
                }
            })
            .filter(commoncrawl::is_response)
            .par_bridge()
            .map(|record| Self::process_record(record, identifier, annotator, corpus, dump))
            .collect();

        info!("shard {shard_path:?}: {} documents", records.len());

        Ok(records)
    }

    /// Process a single record: annotate licenses on the markup, extract
    /// text, identify language, look up containment.
    fn process_record(
        record: warc::Record<warc::BufferedBody>,
        identifier: &FastText,
        annotator: &Annotator<Document>,
        corpus: Option<&CsvCorpus>,
        dump: Option<&str>,
    ) -> Document {
        let (headers, body) = record.into_raw_parts();
        let html = String::from_utf8_lossy(commoncrawl::http_payload(&body)).into_owned();

        let mut doc = Document::new(html, headers.headers, Metadata::default());

        // license annotation runs on the markup
        annotator.annotate(&mut doc);

        // then the content becomes plain text
        let mut doc = TextExtract.transform_own(doc);

        let identification = match identifier.identify(doc.content()) {
            Ok(id) => id,
            Err(e) => {
                error!("{}: identification error: {e:?}", doc.warc_id());
                None
            }
        };
        doc.metadata_mut().set_identification(identification);

        let containment = match (corpus, dump) {
            (Some(corpus), Some(dump)) => {
                let lang = doc
                    .metadata()
                    .identification()
                    .map(|id| id.label().to_string())
                    .unwrap_or_else(|| "und".to_string());
                let id = doc.warc_id();
                corpus.lookup(&lang, dump, record_uuid(&id))
            }
            _ => Containment::NotApplicable,
        };
        doc.metadata_mut().set_in_reference_corpus(containment);

        doc
    }

    /// Group documents by identified language; unidentified documents go
    /// under `und`.
    fn sort_by_lang(documents: Vec<Document>) -> HashMap<LanguageTag<String>, Vec<Document>> {
        let undetermined = LanguageTag::parse("und".to_string()).expect("und is a valid tag");
        let mut ret: HashMap<LanguageTag<String>, Vec<Document>> = HashMap::new();

        for document in documents {
            let lang = document
                .metadata()
                .identification()
                .map(|id| id.label().clone())
                .unwrap_or_else(|| undetermined.clone());
            ret.entry(lang).or_default().push(document);
        }

        ret
    }

    /// Write documents concurrently, one writer per language.
    fn write_documents(
        langfiles: &LangFiles,
        documents: HashMap<LanguageTag<String>, Vec<Document>>,
    ) -> Result<(), Error> {
        let errors: Vec<Error> = documents
            .into_par_iter()
            .map(|(lang, docs)| {
                info!("[{lang}]: {} documents", docs.len());

                let writer = langfiles.get_or_insert(lang)?;
                let mut writer_lock = writer.lock().expect("writer lock poisoned");
                writer_lock.write(docs)?;

                Ok(())
            })
            .filter_map(Result::err)
            .collect();

        for error in &errors {
            error!("{error:?}");
        }
        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Pipeline<()> for CcDoc {
    fn version() -> &'static str {
        "0.1.0"
    }

    fn run(&self) -> Result<(), Error> {
        let identifier = FastText::new(&self.lid_path, 1, 0.8)?;

        if !self.dst.exists() {
            warn!("Destination folder does not exist. Creating");
            std::fs::create_dir(&self.dst)?;
        }
        if !self.dst.is_dir() {
            return Err(Error::Custom(format!(
                "Destination has to be a directory: {:?}",
                self.dst
            )));
        }

        let corpus = match &self.reference {
            Some(path) => Some(CsvCorpus::from_dir(path, self.ignore_langs.clone())?),
            None => None,
        };

        let annotator = {
            let mut annotator = Annotator::default();
            annotator.add(Box::<LicenseAnnotator>::default());
            annotator
        };

        let langfiles = LangFiles::new(&self.dst);
        let paths = self.get_paths()?;

        // one shard per worker; records are parallelized inside the shard
        paths.par_iter().for_each(|path| {
            match Self::process_shard(
                path,
                &identifier,
                &annotator,
                corpus.as_ref(),
                self.dump.as_deref(),
            ) {
                Ok(documents) => {
                    let by_lang = Self::sort_by_lang(documents);
                    if let Err(e) = Self::write_documents(&langfiles, by_lang) {
                        error!("error writing shard {path:?}: {e:?}");
                    }
                }
                Err(e) => error!("error processing shard {path:?}: {e:?}"),
            }
        });

        langfiles.flush_all()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::identifiers::Identification;
    use crate::license::LicenseRecord;

    use super::*;

    fn doc_with_lang(lang: Option<&str>) -> Document {
        let identification = lang.map(|l| {
            Identification::new(LanguageTag::parse(l.to_string()).unwrap(), 0.9)
        });
        Document::new(
            "text".to_string(),
            Default::default(),
            Metadata::new(identification, LicenseRecord::default(), Containment::default()),
        )
    }

    #[test]
    fn test_sort_by_lang() {
        let docs = vec![
            doc_with_lang(Some("en")),
            doc_with_lang(Some("fr")),
            doc_with_lang(Some("en")),
            doc_with_lang(None),
        ];

        let by_lang = CcDoc::sort_by_lang(docs);

        let en = LanguageTag::parse("en".to_string()).unwrap();
        let und = LanguageTag::parse("und".to_string()).unwrap();
        assert_eq!(by_lang.get(&en).unwrap().len(), 2);
        assert_eq!(by_lang.get(&und).unwrap().len(), 1);
        assert_eq!(by_lang.len(), 3);
    }
}
