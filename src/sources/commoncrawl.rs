/*! CommonCrawl shard reader.

Reads gzipped WARC shards. CommonCrawl files are multipart-gzipped and
need a multi gz decoder (such as [MultiGzDecoder]).

Unlike WET extracts, WARC response records hold the whole HTTP exchange:
[http_payload] strips the HTTP header block so the scanner sees markup.
!*/
use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use warc::{BufferedBody, Record, WarcHeader, WarcReader};

use crate::error::Error;

/// WARC shard, generic over the reader type.
pub struct Shard<T> {
    reader: WarcReader<T>,
}

/// Shard reader using [MultiGzDecoder] over a [File].
impl Shard<BufReader<flate2::read::MultiGzDecoder<File>>> {
    /// Create a new reader from a gzipped WARC file.
    pub fn from_path_gzip<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let gzip_file = File::open(path)?;
        let gzip_stream = flate2::read::MultiGzDecoder::new(gzip_file);
        let bufreader = BufReader::new(gzip_stream);

        Ok(Self {
            reader: WarcReader::new(bufreader),
        })
    }
}

impl<T: BufRead> Shard<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader: WarcReader::new(reader),
        }
    }

    pub fn iter_records(
        self,
    ) -> impl Iterator<Item = Result<Record<BufferedBody>, warc::Error>> {
        self.reader.iter_records()
    }
}

/// True iff the record is an HTTP response (the only kind carrying
/// markup).
pub fn is_response(record: &Record<BufferedBody>) -> bool {
    record
        .header(WarcHeader::WarcType)
        .map(|ty| ty.to_lowercase() == "response")
        .unwrap_or(false)
}

/// Strip the HTTP header block from a response record body.
///
/// Returns the payload after the first blank line, or the whole body for
/// records without one (e.g. already-stripped conversions).
pub fn http_payload(body: &[u8]) -> &[u8] {
    body.windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| &body[pos + 4..])
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::http_payload;

    #[test]
    fn test_http_payload_split() {
        let body = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<html></html>";
        assert_eq!(http_payload(body), b"<html></html>");
    }

    #[test]
    fn test_payload_without_header_block() {
        let body = b"<html></html>";
        assert_eq!(http_payload(body), b"<html></html>");
    }
}
