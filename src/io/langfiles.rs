/*! Thread-safe language-separated document writers.

Each language gets a [DocWriter] wrapped into an [Arc<Mutex<_>>]; the map
itself sits behind a [RwLock] so that workers can insert writers for newly
seen languages while others write. Writer acquisition is a single
[LangFiles::get_or_insert] call holding the write lock, so concurrent
workers always share one writer per language.
!*/
use std::{
    collections::{hash_map::Entry, HashMap},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, RwLock},
};

use log::info;
use oxilangtag::LanguageTag;

use crate::error::Error;

use super::writer::DocWriter;

type LanguageMap = HashMap<LanguageTag<String>, Arc<Mutex<DocWriter>>>;

pub struct LangFiles {
    writers: Arc<RwLock<LanguageMap>>,
    dst: PathBuf,
}

impl LangFiles {
    pub fn new(dst: &Path) -> Self {
        Self {
            writers: Arc::new(RwLock::new(HashMap::new())),
            dst: dst.to_path_buf(),
        }
    }

    /// Get the writer for a language, opening one if the language is not
    /// already managed. Atomic: two workers racing on a new language get
    /// the same writer back.
    pub fn get_or_insert(
        &self,
        lang: LanguageTag<String>,
    ) -> Result<Arc<Mutex<DocWriter>>, Error> {
        let mut writers = self.writers.write().expect("writer map lock poisoned");
        match writers.entry(lang) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                info!("opening writer for {}", entry.key());
                let writer = Arc::new(Mutex::new(DocWriter::new(&self.dst, entry.key().as_str())?));
                Ok(entry.insert(writer).clone())
            }
        }
    }

    /// Flush all open writers. Call once every write is done.
    pub fn flush_all(&self) -> Result<(), Error> {
        use super::writer::WriterTrait;
        for writer in self
            .writers
            .read()
            .expect("writer map lock poisoned")
            .values()
        {
            let mut lock = writer.lock().expect("writer lock poisoned");
            lock.flush()?;
        }
        Ok(())
    }
}
