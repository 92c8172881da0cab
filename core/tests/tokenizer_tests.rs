use vsm_core::stemmer::IdentityStemmer;
use vsm_core::stopwords::Stopwords;
use vsm_core::tokenizer::{normalize, tokenize, Analyzer};

fn stopwords() -> Stopwords {
    Stopwords::from_lines("the\nand\nof\na\nis\n")
}

#[test]
fn it_normalizes_and_stems() {
    let words = Analyzer::english(stopwords()).analyze("Running Runners RUN! The café's menu.");
    // Stemming to "run" should appear
    assert!(words.contains(&"run".to_string()));
    assert!(words.contains(&"menu".to_string()));
}

#[test]
fn it_filters_stopwords() {
    let words = Analyzer::english(stopwords()).analyze("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words.len(), 5);
}

#[test]
fn co_operation_splits_at_hyphen_and_period() {
    let raw = tokenize("co-operation.");
    assert_eq!(raw, vec!["co-operation."]);
    let words = normalize(raw, &stopwords());
    assert_eq!(words, vec!["co", "operation"]);

    let stemmed = Analyzer::english(stopwords()).analyze("co-operation.");
    assert_eq!(stemmed, vec!["co", "oper"]);
}

#[test]
fn abbreviations_split_into_fragments() {
    let words = normalize(tokenize("U.S.-based state-of-the-art"), &stopwords());
    // "of" and "the" are stopwords, "u" and "s" are too short
    assert_eq!(words, vec!["based", "state", "art"]);
}

#[test]
fn empty_and_symbolic_input_yields_nothing() {
    let analyzer = Analyzer::new(stopwords(), IdentityStemmer);
    assert!(analyzer.analyze("").is_empty());
    assert!(analyzer.analyze("--- ... 1234 (42) !!").is_empty());
}

#[test]
fn same_pipeline_for_corpus_and_query_text() {
    let analyzer = Analyzer::english(stopwords());
    assert_eq!(analyzer.analyze("Networks"), analyzer.analyze("networks."));
}

#[test]
fn possessive_at_sentence_end_keeps_the_word() {
    let analyzer = Analyzer::new(stopwords(), IdentityStemmer);
    assert_eq!(analyzer.analyze("the network's."), vec!["network"]);
    assert_eq!(analyzer.analyze("John's."), vec!["john"]);
    assert_eq!(
        analyzer.analyze("we trained the network's."),
        analyzer.analyze("we trained the network's weights")[..3].to_vec()
    );
}

#[test]
fn contractions_followed_by_punctuation_are_split() {
    let words = normalize(tokenize("isn't. John's. it's-"), &Stopwords::default());
    assert_eq!(words, vec!["is", "john", "it"]);
}
