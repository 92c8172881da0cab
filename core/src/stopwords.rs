use crate::error::{Error, ResourceKind, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Fixed set of words excluded from indexing and querying.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Load a line-delimited list: one word per line, trailing whitespace stripped, blank lines ignored.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::missing(ResourceKind::StopwordFile, path));
        }
        let text = fs::read_to_string(path)?;
        let stopwords = Self::from_lines(&text);
        tracing::debug!(path = %path.display(), count = stopwords.len(), "loaded stopwords");
        Ok(stopwords)
    }

    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
