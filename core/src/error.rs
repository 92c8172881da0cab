//! Error types for the retrieval engine

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which on-disk resource a [`Error::MissingResource`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    CorpusDirectory,
    StopwordFile,
    TfIdfTable,
    IdfTable,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::CorpusDirectory => "corpus directory",
            ResourceKind::StopwordFile => "stopword file",
            ResourceKind::TfIdfTable => "TF-IDF table",
            ResourceKind::IdfTable => "IDF table",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A file or directory required by indexing or querying is absent
    #[error("Missing {kind}: {}", path.display())]
    MissingResource { kind: ResourceKind, path: PathBuf },

    /// Corpus file whose name is not a positive integer
    #[error("Malformed document id in file name: {}", path.display())]
    MalformedDocumentId { path: PathBuf },

    #[error("Duplicate document id {doc_id}: {}", path.display())]
    DuplicateDocumentId { doc_id: u32, path: PathBuf },

    #[error("Duplicate vocabulary term: {term:?}")]
    DuplicateTerm { term: String },

    /// Persisted weight table that cannot be trusted
    #[error("Malformed weight table {}: {reason}", path.display())]
    MalformedTable { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::MalformedTable { path: path.into(), reason: reason.into() }
    }

    pub(crate) fn missing(kind: ResourceKind, path: impl Into<PathBuf>) -> Self {
        Error::MissingResource { kind, path: path.into() }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing(ResourceKind::StopwordFile, "Stopword-List.txt");
        assert_eq!(err.to_string(), "Missing stopword file: Stopword-List.txt");

        let err = Error::malformed("idf.csv", "expected one record");
        assert_eq!(err.to_string(), "Malformed weight table idf.csv: expected one record");
    }
}
