use crate::index::{IdfTable, TermId, Vocabulary};
use crate::weights::log_tf;
use std::sync::Arc;

/// Query weights over the whole vocabulary. Unit length unless no query term matched.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    vocabulary: Arc<Vocabulary>,
    weights: Vec<f64>,
}

impl QueryVector {
    pub fn weight(&self, term: TermId) -> f64 {
        self.weights.get(term as usize).copied().unwrap_or(0.0)
    }

    pub fn get(&self, term: &str) -> f64 {
        self.vocabulary.get(term).map_or(0.0, |tid| self.weight(tid))
    }

    /// Dense weights indexed by term id.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// True when no query term matched the vocabulary (or all matches had zero IDF).
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }
}

/// Weight each vocabulary term by `(1 + log10 k) * idf` for `k` occurrences in
/// `terms`, then L2-normalize. Terms outside the vocabulary are ignored.
pub fn compute_query_vector(terms: &[String], idf: &IdfTable) -> QueryVector {
    let vocabulary = Arc::clone(idf.vocabulary());
    let mut counts = vec![0u32; vocabulary.len()];
    for term in terms {
        if let Some(tid) = vocabulary.get(term) {
            counts[tid as usize] += 1;
        }
    }

    let mut weights: Vec<f64> = counts
        .iter()
        .enumerate()
        .map(|(tid, &k)| log_tf(k) * idf.weight(tid as TermId))
        .collect();

    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in weights.iter_mut() {
            *w /= norm;
        }
    }
    QueryVector { vocabulary, weights }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idf_table(entries: &[(&str, f64)]) -> IdfTable {
        let vocab = Arc::new(Vocabulary::from_terms(entries.iter().map(|(t, _)| *t)));
        let mut weights = vec![0.0; vocab.len()];
        for (t, w) in entries {
            weights[vocab.get(t).unwrap() as usize] = *w;
        }
        IdfTable::new(vocab, weights)
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn normalized_to_unit_length() {
        let idf = idf_table(&[("neural", 0.47), ("network", 0.2), ("other", 1.0)]);
        let q = compute_query_vector(&terms(&["neural", "network", "network"]), &idf);
        assert!((q.norm() - 1.0).abs() < 1e-9);
        assert_eq!(q.get("other"), 0.0);
        let ratio = q.get("network") / q.get("neural");
        assert!((ratio - (1.0 + 2f64.log10()) * 0.2 / 0.47).abs() < 1e-9);
    }

    #[test]
    fn unmatched_query_is_zero_vector() {
        let idf = idf_table(&[("neural", 0.47)]);
        let q = compute_query_vector(&terms(&["unknown"]), &idf);
        assert!(q.is_zero());
        assert_eq!(q.norm(), 0.0);
        assert_eq!(q.weights().len(), 1);
    }

    #[test]
    fn empty_query_is_zero_vector() {
        let idf = idf_table(&[("neural", 0.47)]);
        assert!(compute_query_vector(&[], &idf).is_zero());
    }
}
