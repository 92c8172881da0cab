use crate::config::{NO_DOCUMENTS_FOUND, SCORE_THRESHOLD};
use crate::index::{DocId, TfIdfMatrix};
use crate::query::QueryVector;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
}

/// Dot product of every document row with the query, in document id order.
pub fn score_documents(matrix: &TfIdfMatrix, query: &QueryVector) -> Vec<ScoredDoc> {
    matrix
        .rows()
        .map(|(doc_id, row)| ScoredDoc { doc_id, score: row.dot(query.weights()) })
        .collect()
}

/// Score `doc_ids`, drop anything below [`SCORE_THRESHOLD`], and sort by score
/// descending with ascending document id breaking ties. Unknown ids score 0.
pub fn rank_scored(doc_ids: &[DocId], matrix: &TfIdfMatrix, query: &QueryVector) -> Vec<ScoredDoc> {
    if query.is_zero() {
        return Vec::new();
    }
    let mut scored: Vec<ScoredDoc> = doc_ids
        .iter()
        .map(|&doc_id| {
            let score = matrix.row(doc_id).map_or(0.0, |row| row.dot(query.weights()));
            ScoredDoc { doc_id, score }
        })
        .filter(|s| s.score >= SCORE_THRESHOLD)
        .collect();
    scored.sort_by(by_score_then_id);
    scored
}

pub fn rank(doc_ids: &[DocId], matrix: &TfIdfMatrix, query: &QueryVector) -> Vec<DocId> {
    rank_scored(doc_ids, matrix, query).into_iter().map(|s| s.doc_id).collect()
}

fn by_score_then_id(a: &ScoredDoc, b: &ScoredDoc) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.doc_id.cmp(&b.doc_id))
}

/// Space-separated ids, or [`NO_DOCUMENTS_FOUND`] for an empty ranking.
pub fn format_ranking(ranked: &[ScoredDoc]) -> String {
    if ranked.is_empty() {
        return NO_DOCUMENTS_FOUND.to_string();
    }
    ranked.iter().map(|s| s.doc_id.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IdfTable, SparseRow, Vocabulary, WeightMatrix};
    use crate::query::compute_query_vector;
    use std::sync::Arc;

    fn fixture() -> (TfIdfMatrix, IdfTable) {
        let vocab = Arc::new(Vocabulary::from_terms(["alpha", "beta"]));
        let matrix = WeightMatrix::new(
            Arc::clone(&vocab),
            vec![
                (1, SparseRow::from_entries(vec![(0, 0.5)])),
                (2, SparseRow::from_entries(vec![(0, 0.5)])),
                (3, SparseRow::from_entries(vec![(0, 0.9), (1, 0.3)])),
                (4, SparseRow::from_entries(vec![(1, 0.01)])),
            ],
        );
        let idf = IdfTable::new(vocab, vec![1.0, 1.0]);
        (matrix, idf)
    }

    #[test]
    fn sorted_desc_with_id_tiebreak_and_threshold() {
        let (matrix, idf) = fixture();
        let q = compute_query_vector(&["alpha".to_string()], &idf);
        let ranked = rank_scored(matrix.doc_ids(), &matrix, &q);
        let ids: Vec<DocId> = ranked.iter().map(|s| s.doc_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(ranked.iter().all(|s| s.score >= SCORE_THRESHOLD));
    }

    #[test]
    fn zero_query_ranks_nothing() {
        let (matrix, idf) = fixture();
        let q = compute_query_vector(&["gamma".to_string()], &idf);
        assert!(rank(matrix.doc_ids(), &matrix, &q).is_empty());
    }

    #[test]
    fn score_documents_covers_every_row() {
        let (matrix, idf) = fixture();
        let q = compute_query_vector(&["beta".to_string()], &idf);
        let scores = score_documents(&matrix, &q);
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[0].score, 0.0);
        assert!((scores[2].score - 0.3).abs() < 1e-12);
    }

    #[test]
    fn formats_ids_or_indicator() {
        assert_eq!(format_ranking(&[]), NO_DOCUMENTS_FOUND);
        let ranked = [ScoredDoc { doc_id: 4, score: 0.9 }, ScoredDoc { doc_id: 1, score: 0.2 }];
        assert_eq!(format_ranking(&ranked), "4 1");
    }
}
