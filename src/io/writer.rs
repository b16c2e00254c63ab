/*! Document writer for a given language.

Writes documents as JSON lines into `<dst>/<lang>.jsonl`.
!*/
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::pipelines::ccdoc::types::Document;

pub trait WriterTrait {
    type Item;

    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    fn flush(&mut self) -> Result<(), Error>;
}

pub struct DocWriter {
    handle: BufWriter<std::fs::File>,
}

impl DocWriter {
    /// Create a new writer for the provided language. The file is created
    /// (or appended to) at the root of `dst`.
    pub fn new(dst: &Path, lang: &str) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dst.join(format!("{lang}.jsonl")))?;
        Ok(Self {
            handle: BufWriter::new(file),
        })
    }
}

impl WriterTrait for DocWriter {
    type Item = Document;

    fn write(&mut self, docs: Vec<Document>) -> Result<(), Error> {
        for doc in &docs {
            self.write_single(doc)?;
        }
        Ok(())
    }

    fn write_single(&mut self, doc: &Document) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, doc)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufRead;

    use crate::pipelines::ccdoc::types::{Document, Metadata};

    use super::*;

    #[test]
    fn test_write_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let docs: Vec<Document> = ["one", "two"]
            .iter()
            .map(|content| {
                Document::new(content.to_string(), Default::default(), Metadata::default())
            })
            .collect();

        let mut writer = DocWriter::new(dir.path(), "en").unwrap();
        writer.write(docs.clone()).unwrap();
        writer.flush().unwrap();

        let file = std::fs::File::open(dir.path().join("en.jsonl")).unwrap();
        let read: Vec<Document> = std::io::BufReader::new(file)
            .lines()
            .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
            .collect();
        assert_eq!(read, docs);
    }
}
