use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

pub type TermId = u32;
pub type DocId = u32;

/// Distinct terms of the corpus, addressed by a dense [`TermId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    lookup: HashMap<String, TermId>,
}

impl Vocabulary {
    /// Build from any collection of terms; duplicates collapse and ids follow sorted order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort();
        terms.dedup();
        let lookup = terms.iter().enumerate().map(|(i, t)| (t.clone(), i as TermId)).collect();
        Self { terms, lookup }
    }

    /// Build keeping the given order. Fails on the first duplicated term.
    pub fn from_ordered(terms: Vec<String>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(terms.len());
        for (i, t) in terms.iter().enumerate() {
            if lookup.insert(t.clone(), i as TermId).is_some() {
                return Err(Error::DuplicateTerm { term: t.clone() });
            }
        }
        Ok(Self { terms, lookup })
    }

    pub fn get(&self, term: &str) -> Option<TermId> {
        self.lookup.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> + '_ {
        self.terms.iter().enumerate().map(|(i, t)| (i as TermId, t.as_str()))
    }
}

/// One document's weights, sorted by term id. Absent terms weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseRow {
    entries: Vec<(TermId, f64)>,
}

impl SparseRow {
    /// Zero weights are dropped; entries are sorted by term id.
    pub fn from_entries(mut entries: Vec<(TermId, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(tid, _)| tid);
        Self { entries }
    }

    pub fn get(&self, term: TermId) -> f64 {
        match self.entries.binary_search_by_key(&term, |&(tid, _)| tid) {
            Ok(i) => self.entries[i].1,
            Err(_) => 0.0,
        }
    }

    pub fn entries(&self) -> &[(TermId, f64)] {
        &self.entries
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w).sum()
    }

    /// Dot product against a dense vector indexed by term id.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(tid, w)| w * dense.get(tid as usize).copied().unwrap_or(0.0))
            .sum()
    }
}

/// (document, term) weights over a shared vocabulary. Rows follow `doc_ids`, which is ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    vocabulary: Arc<Vocabulary>,
    doc_ids: Vec<DocId>,
    rows: Vec<SparseRow>,
}

/// Log-dampened term counts per document.
pub type TermFrequencyTable = WeightMatrix;
/// TF times IDF per document: the persisted document vector space.
pub type TfIdfMatrix = WeightMatrix;

impl WeightMatrix {
    /// `rows` pairs each document id with its row; the pairs are sorted by id here.
    pub fn new(vocabulary: Arc<Vocabulary>, mut rows: Vec<(DocId, SparseRow)>) -> Self {
        rows.sort_by_key(|(doc_id, _)| *doc_id);
        let (doc_ids, rows): (Vec<DocId>, Vec<SparseRow>) = rows.into_iter().unzip();
        Self { vocabulary, doc_ids, rows }
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn doc_ids(&self) -> &[DocId] {
        &self.doc_ids
    }

    pub fn num_docs(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn row(&self, doc_id: DocId) -> Option<&SparseRow> {
        self.doc_ids.binary_search(&doc_id).ok().map(|i| &self.rows[i])
    }

    /// Weight of `term` in `doc_id`, 0 when either is unknown.
    pub fn get(&self, doc_id: DocId, term: &str) -> f64 {
        match (self.row(doc_id), self.vocabulary.get(term)) {
            (Some(row), Some(tid)) => row.get(tid),
            _ => 0.0,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (DocId, &SparseRow)> + '_ {
        self.doc_ids.iter().copied().zip(self.rows.iter())
    }
}

/// IDF weight per vocabulary term, indexed by term id.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    vocabulary: Arc<Vocabulary>,
    weights: Vec<f64>,
}

impl IdfTable {
    /// `weights` must have one entry per vocabulary term.
    pub fn new(vocabulary: Arc<Vocabulary>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(vocabulary.len(), weights.len());
        Self { vocabulary, weights }
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn weight(&self, term: TermId) -> f64 {
        self.weights.get(term as usize).copied().unwrap_or(0.0)
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|tid| self.weight(tid))
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}
