use crate::error::{Error, ResourceKind, Result};
use crate::index::DocId;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Raw document texts keyed by id; iteration is in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: BTreeMap<DocId, String>,
}

impl Corpus {
    pub fn from_documents<I: IntoIterator<Item = (DocId, String)>>(docs: I) -> Self {
        Self { documents: docs.into_iter().collect() }
    }

    /// Read every regular, non-hidden file in `dir`. File stems must be positive integers.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::missing(ResourceKind::CorpusDirectory, dir));
        }
        let mut documents = BTreeMap::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            let doc_id = parse_doc_id(path)?;
            let bytes = fs::read(path)?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            if documents.insert(doc_id, text).is_some() {
                return Err(Error::DuplicateDocumentId { doc_id, path: path.to_path_buf() });
            }
        }
        tracing::info!(dir = %dir.display(), num_docs = documents.len(), "loaded corpus");
        Ok(Self { documents })
    }

    /// Document ids, ascending.
    pub fn doc_ids(&self) -> Vec<DocId> {
        self.documents.keys().copied().collect()
    }

    pub fn get(&self, doc_id: DocId) -> Option<&str> {
        self.documents.get(&doc_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> + '_ {
        self.documents.iter().map(|(id, text)| (*id, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn parse_doc_id(path: &Path) -> Result<DocId> {
    let malformed = || Error::MalformedDocumentId { path: PathBuf::from(path) };
    let stem = path.file_stem().and_then(|s| s.to_str()).ok_or_else(malformed)?;
    match stem.parse::<DocId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_sorted_by_numeric_id() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("10.txt"), "ten").unwrap();
        fs::write(dir.path().join("2.txt"), "two").unwrap();
        fs::write(dir.path().join(".hidden"), "skip").unwrap();
        let corpus = Corpus::load(dir.path()).unwrap();
        assert_eq!(corpus.doc_ids(), vec![2, 10]);
        assert_eq!(corpus.get(10), Some("ten"));
    }

    #[test]
    fn rejects_non_numeric_names() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let err = Corpus::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedDocumentId { .. }));
    }

    #[test]
    fn rejects_zero_and_duplicate_ids() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("0.txt"), "x").unwrap();
        assert!(matches!(Corpus::load(dir.path()).unwrap_err(), Error::MalformedDocumentId { .. }));

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "x").unwrap();
        fs::write(dir.path().join("01.txt"), "y").unwrap();
        assert!(matches!(Corpus::load(dir.path()).unwrap_err(), Error::DuplicateDocumentId { doc_id: 1, .. }));
    }

    #[test]
    fn missing_directory() {
        let err = Corpus::load(Path::new("/no/such/corpus")).unwrap_err();
        assert!(matches!(err, Error::MissingResource { kind: ResourceKind::CorpusDirectory, .. }));
    }
}
