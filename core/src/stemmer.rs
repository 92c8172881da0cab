//! Stemming is consumed as a capability: anything that maps a token to a
//! stable root form can be plugged into the [`Analyzer`](crate::tokenizer::Analyzer).
//! Indexing and querying must share the same implementation.

use rust_stemmers::{Algorithm, Stemmer};

/// Pure token → stem mapping.
pub trait TermStemmer: Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// English Snowball (Porter2) stemmer.
pub struct SnowballStemmer {
    inner: Stemmer,
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self { inner: Stemmer::create(Algorithm::English) }
    }
}

impl TermStemmer for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

/// Leaves tokens untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityStemmer;

impl TermStemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}
