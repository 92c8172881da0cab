use crate::config::EngineConfig;
use crate::error::Result;
use crate::index::{IdfTable, TfIdfMatrix, Vocabulary};
use crate::persist::{load_weights, IndexPaths};
use crate::query::compute_query_vector;
use crate::rank::{format_ranking, rank_scored, ScoredDoc};
use crate::stopwords::Stopwords;
use crate::tokenizer::Analyzer;

/// Query-time context: the analyzer and the loaded weight tables.
///
/// Built once and shared read-only; each query owns its own query vector and scores.
pub struct SearchEngine {
    analyzer: Analyzer,
    tf_idf: TfIdfMatrix,
    idf: IdfTable,
}

impl SearchEngine {
    pub fn new(analyzer: Analyzer, tf_idf: TfIdfMatrix, idf: IdfTable) -> Self {
        Self { analyzer, tf_idf, idf }
    }

    /// Load the stopwords and persisted tables named by `config`.
    pub fn open(config: &EngineConfig) -> Result<Self> {
        let stopwords = Stopwords::load(&config.stopwords_path)?;
        let (tf_idf, idf) = load_weights(&IndexPaths::new(&config.index_dir))?;
        Ok(Self::new(Analyzer::english(stopwords), tf_idf, idf))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.idf.vocabulary()
    }

    pub fn num_docs(&self) -> usize {
        self.tf_idf.num_docs()
    }

    /// Ranked documents for a raw query string; empty when nothing clears the threshold.
    pub fn search(&self, query: &str) -> Vec<ScoredDoc> {
        let terms = self.analyzer.analyze(query);
        let query_vector = compute_query_vector(&terms, &self.idf);
        let ranked = rank_scored(self.tf_idf.doc_ids(), &self.tf_idf, &query_vector);
        tracing::debug!(query, num_terms = terms.len(), hits = ranked.len(), "query ranked");
        ranked
    }

    /// Space-separated ranked ids, or the "no documents found" indicator.
    pub fn search_display(&self, query: &str) -> String {
        format_ranking(&self.search(query))
    }
}
