//! Indexing entry point: corpus + stopwords in, persisted weight tables out.

use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{DocId, IdfTable, TfIdfMatrix};
use crate::persist::{save_weights, IndexPaths};
use crate::stopwords::Stopwords;
use crate::tokenizer::Analyzer;
use crate::weights::{compute_inverse_document_frequency, compute_term_frequency, compute_tf_idf};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Built { num_docs: usize, num_terms: usize },
    /// Both tables already existed and the build was not forced.
    Skipped,
}

/// Analyse every document and compute the TF-IDF matrix and IDF table.
pub fn build_weights(corpus: &Corpus, analyzer: &Analyzer) -> (TfIdfMatrix, IdfTable) {
    let analysed: BTreeMap<DocId, Vec<String>> =
        corpus.iter().map(|(doc_id, text)| (doc_id, analyzer.analyze(text))).collect();
    let tf = compute_term_frequency(&analysed);
    let idf = compute_inverse_document_frequency(&tf);
    let tf_idf = compute_tf_idf(&tf, &idf);
    (tf_idf, idf)
}

/// Build and persist the weights unless both tables already exist.
///
/// `force` rebuilds regardless; the output for an unchanged corpus is byte-identical.
pub fn ensure_weights(config: &EngineConfig, force: bool) -> Result<BuildOutcome> {
    let paths = IndexPaths::new(&config.index_dir);
    if !force && paths.weights_exist() {
        tracing::info!(root = %paths.root.display(), "weights are already calculated");
        return Ok(BuildOutcome::Skipped);
    }

    let stopwords = Stopwords::load(&config.stopwords_path)?;
    let corpus = Corpus::load(&config.corpus_dir)?;
    let analyzer = Analyzer::english(stopwords);

    let (tf_idf, idf) = build_weights(&corpus, &analyzer);
    save_weights(&paths, &tf_idf, &idf)?;
    Ok(BuildOutcome::Built { num_docs: tf_idf.num_docs(), num_terms: idf.vocabulary().len() })
}
