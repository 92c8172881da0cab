use crate::config::{MAX_TOKEN_LEN, MIN_TERM_LEN};
use crate::stemmer::{SnowballStemmer, TermStemmer};
use crate::stopwords::Stopwords;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::VecDeque;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // '.', '-' and '\'' stay inside words; normalization deals with them.
    static ref WORD_RE: Regex = Regex::new(r#"[^\s,;:!?()\[\]{}"<>\u{201C}\u{201D}\u{00AB}\u{00BB}]+"#).expect("valid regex");
    // Trailing punctuation after the clitic ("network's.") is dropped with it.
    static ref CLITIC_RE: Regex = Regex::new(r"(?i)^(.+?)(n't|'s|'re|'ve|'ll|'d|'m)[^\p{L}\p{N}]*$").expect("valid regex");
}

const STRIP_SYMBOLS: &str = "!@#$%^&*()-_=+[{]}\\|;:'\",<.>/?`~";

fn is_strippable(c: char) -> bool {
    c.is_ascii_digit() || STRIP_SYMBOLS.contains(c) || matches!(c, '\u{2018}' | '\u{2013}' | '\u{2014}')
}

/// Split raw text into candidate word tokens.
///
/// Text is NFKC-normalized first. Contractions are split at the clitic
/// (`don't` → `do`, `n't`); hyphens and periods are left for [`normalize`].
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .nfkc()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();
    let mut tokens = Vec::new();
    for mat in WORD_RE.find_iter(&normalized) {
        let word = mat.as_str();
        match CLITIC_RE.captures(word) {
            Some(caps) => {
                tokens.push(caps[1].to_string());
                tokens.push(caps[2].to_string());
            }
            None => tokens.push(word.to_string()),
        }
    }
    tokens
}

/// Apply the normalization rules to raw tokens and keep only indexable words.
///
/// Tokens over [`MAX_TOKEN_LEN`] chars or matching a stopword are dropped before
/// anything else. The rest are stripped of edge digits and symbols and lowercased.
/// A token with an inner `.` (or, failing that, `-`) is replaced by its fragments,
/// which join the back of the queue and go through the same rules.
pub fn normalize(tokens: Vec<String>, stopwords: &Stopwords) -> Vec<String> {
    let mut queue: VecDeque<String> = tokens.into();
    let mut out = Vec::new();
    while let Some(token) = queue.pop_front() {
        if token.chars().count() > MAX_TOKEN_LEN || stopwords.contains(&token) {
            continue;
        }
        let word = token.trim_matches(is_strippable).to_lowercase();
        if word.contains('.') {
            queue.extend(word.split('.').map(str::to_string));
        } else if word.contains('-') {
            queue.extend(word.split('-').map(str::to_string));
        } else if is_term(&word, stopwords) {
            out.push(word);
        }
    }
    out
}

fn is_term(word: &str, stopwords: &Stopwords) -> bool {
    word.chars().count() >= MIN_TERM_LEN
        && word.chars().all(char::is_alphabetic)
        && !stopwords.contains(word)
}

/// Text → terms pipeline shared by indexing and querying.
pub struct Analyzer {
    stopwords: Stopwords,
    stemmer: Box<dyn TermStemmer>,
}

impl Analyzer {
    pub fn new(stopwords: Stopwords, stemmer: impl TermStemmer + 'static) -> Self {
        Self { stopwords, stemmer: Box::new(stemmer) }
    }

    /// Analyzer with the English Snowball stemmer.
    pub fn english(stopwords: Stopwords) -> Self {
        Self::new(stopwords, SnowballStemmer::default())
    }

    /// Tokenize, normalize and stem `text`, trimming any trailing apostrophe from each stem.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        normalize(tokenize(text), &self.stopwords)
            .into_iter()
            .filter_map(|token| {
                let stem = self.stemmer.stem(&token);
                let stem = stem.trim_end_matches('\'');
                (!stem.is_empty()).then(|| stem.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::IdentityStemmer;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Running, runner's run!");
        assert_eq!(t, vec!["Running", "runner", "'s", "run"]);
    }

    #[test]
    fn splits_negative_contraction() {
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
    }

    #[test]
    fn splits_clitic_before_trailing_punctuation() {
        assert_eq!(tokenize("network's."), vec!["network", "'s"]);
        assert_eq!(tokenize("isn't. it's-"), vec!["is", "n't", "it", "'s"]);
    }

    #[test]
    fn hyphen_and_period_split() {
        let out = normalize(tokenize("co-operation."), &Stopwords::default());
        assert_eq!(out, vec!["co", "operation"]);
    }

    #[test]
    fn period_split_fragments_are_renormalized() {
        let out = normalize(vec!["e.g.-style".to_string()], &Stopwords::default());
        // "e.g.-style" -> "e", "g", "-style" -> "style"
        assert_eq!(out, vec!["style"]);
    }

    #[test]
    fn drops_digits_symbols_and_short_tokens() {
        let out = normalize(
            vec!["123abc".into(), "a".into(), "x2y".into(), "(Hello)".into(), "...".into()],
            &Stopwords::default(),
        );
        assert_eq!(out, vec!["abc", "hello"]);
    }

    #[test]
    fn overlong_tokens_are_discarded_before_stripping() {
        let long = format!("{}!", "a".repeat(45));
        let ok = "b".repeat(45);
        let out = normalize(vec![long, ok.clone()], &Stopwords::default());
        assert_eq!(out, vec![ok]);
    }

    #[test]
    fn stopwords_checked_before_and_after_normalization() {
        let sw = Stopwords::from_lines("the\nand\n");
        let out = normalize(vec!["The".into(), "and".into(), "(the)".into(), "theory".into()], &sw);
        assert_eq!(out, vec!["theory"]);
    }

    #[test]
    fn analyzer_strips_possessive_apostrophe() {
        let analyzer = Analyzer::new(Stopwords::default(), IdentityStemmer);
        assert_eq!(analyzer.analyze("students' papers"), vec!["students", "papers"]);
    }
}
