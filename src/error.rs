//! Error enum
use oxilangtag::LanguageTagParseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Warc(warc::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Csv(csv::Error),
    LanguageTag(LanguageTagParseError),
    FastText(String),
    /// Markup that could not be turned into a usable tree.
    /// Recoverable: the document gets `license_parse_error` instead.
    Markup(String),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<warc::Error> for Error {
    fn from(e: warc::Error) -> Error {
        Error::Warc(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<LanguageTagParseError> for Error {
    fn from(e: LanguageTagParseError) -> Error {
        Error::LanguageTag(e)
    }
}

/// fasttext reports its errors as plain strings.
impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::FastText(s)
    }
}
