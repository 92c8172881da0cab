//! Engine configuration and the fixed constants of the weighting scheme.
//!
//! Paths default to the layout the engine has always used: a `ResearchPapers`
//! corpus directory and a `Stopword-List.txt` file next to the persisted tables.
//! The binaries override them from CLI flags or environment variables.

use std::path::PathBuf;

/// Documents scoring strictly below this are never returned.
pub const SCORE_THRESHOLD: f64 = 0.05;

/// Raw tokens longer than this (measured before stripping) are discarded.
pub const MAX_TOKEN_LEN: usize = 45;

/// Normalized tokens shorter than this are discarded.
pub const MIN_TERM_LEN: usize = 2;

pub const TF_IDF_FILE: &str = "tf-idf.csv";
pub const IDF_FILE: &str = "idf.csv";

/// Text rendered for an empty ranking.
pub const NO_DOCUMENTS_FOUND: &str = "No documents found";

pub const DEFAULT_CORPUS_DIR: &str = "ResearchPapers";
pub const DEFAULT_STOPWORDS_FILE: &str = "Stopword-List.txt";
pub const DEFAULT_INDEX_DIR: &str = ".";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory holding one `<doc_id>.txt` file per document
    pub corpus_dir: PathBuf,
    /// Line-delimited stopword list
    pub stopwords_path: PathBuf,
    /// Directory the TF-IDF and IDF tables are written to and read from
    pub index_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            stopwords_path: PathBuf::from(DEFAULT_STOPWORDS_FILE),
            index_dir: PathBuf::from(DEFAULT_INDEX_DIR),
        }
    }
}
