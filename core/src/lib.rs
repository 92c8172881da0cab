pub mod builder;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod persist;
pub mod query;
pub mod rank;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod weights;

pub use config::EngineConfig;
pub use engine::SearchEngine;
pub use error::{Error, ResourceKind, Result};
pub use index::{DocId, IdfTable, SparseRow, TermFrequencyTable, TermId, TfIdfMatrix, Vocabulary, WeightMatrix};
pub use query::QueryVector;
pub use rank::ScoredDoc;
