//! TF, DF, IDF and TF-IDF computation over an analysed corpus.
//!
//! TF is log-dampened: `1 + log10(count)` for a term seen `count > 0` times in a
//! document. IDF is `log10(N / df)`. Every vocabulary term comes from some
//! document, so `df >= 1` and the IDF is finite and non-negative.

use crate::index::{DocId, IdfTable, SparseRow, TermFrequencyTable, TermId, TfIdfMatrix, Vocabulary, WeightMatrix};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Log-dampened term frequency.
pub fn log_tf(count: u32) -> f64 {
    if count > 0 {
        1.0 + (count as f64).log10()
    } else {
        0.0
    }
}

/// Count analysed terms per document and dampen the counts.
pub fn compute_term_frequency(docs: &BTreeMap<DocId, Vec<String>>) -> TermFrequencyTable {
    let vocabulary = Arc::new(Vocabulary::from_terms(docs.values().flatten().map(String::as_str)));

    let rows = docs
        .iter()
        .map(|(&doc_id, terms)| {
            let mut counts: HashMap<TermId, u32> = HashMap::new();
            for term in terms {
                if let Some(tid) = vocabulary.get(term) {
                    *counts.entry(tid).or_insert(0) += 1;
                }
            }
            let entries = counts.into_iter().map(|(tid, n)| (tid, log_tf(n))).collect();
            (doc_id, SparseRow::from_entries(entries))
        })
        .collect();

    let tf = WeightMatrix::new(vocabulary, rows);
    tracing::info!(num_docs = tf.num_docs(), num_terms = tf.vocabulary().len(), "term frequency weights created");
    tf
}

/// Number of documents with a nonzero TF, per term id.
pub fn document_frequency(tf: &TermFrequencyTable) -> Vec<u32> {
    let mut df = vec![0u32; tf.vocabulary().len()];
    for (_, row) in tf.rows() {
        for &(tid, _) in row.entries() {
            df[tid as usize] += 1;
        }
    }
    df
}

pub fn compute_inverse_document_frequency(tf: &TermFrequencyTable) -> IdfTable {
    let n = tf.num_docs() as f64;
    let weights = document_frequency(tf)
        .into_iter()
        .map(|df| if df > 0 { (n / df as f64).log10() } else { 0.0 })
        .collect();
    let idf = IdfTable::new(Arc::clone(tf.vocabulary()), weights);
    tracing::info!(num_terms = idf.weights().len(), "inverse document frequency weights calculated");
    idf
}

/// Elementwise `TF[doc, term] * IDF[term]`.
pub fn compute_tf_idf(tf: &TermFrequencyTable, idf: &IdfTable) -> TfIdfMatrix {
    let rows = tf
        .rows()
        .map(|(doc_id, row)| {
            let entries = row.entries().iter().map(|&(tid, w)| (tid, w * idf.weight(tid))).collect();
            (doc_id, SparseRow::from_entries(entries))
        })
        .collect();
    let matrix = WeightMatrix::new(Arc::clone(tf.vocabulary()), rows);
    tracing::info!("tf-idf weights calculated");
    matrix
}
