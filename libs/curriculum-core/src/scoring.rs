//! Usefulness and complexity scoring.
//!
//! Word utility is modeled as linear in raw corpus frequency and
//! independent across words. That is a deliberate simplification of the
//! learning model, not an approximation to refine.

use crate::corpus::Corpus;
use crate::knowledge::Knowledge;

/// Fraction of all corpus word occurrences covered by `words` (0.0–1.0
/// when every word comes from the corpus). Words absent from the corpus
/// contribute nothing.
pub fn usefulness(words: &Knowledge, corpus: &Corpus) -> f64 {
    let covered: u64 = words.words().map(|w| corpus.word_count(w)).sum();
    covered as f64 / corpus.total_words() as f64
}

/// Learning cost of a delta: the number of new words it introduces.
pub fn complexity(delta: &Knowledge) -> f64 {
    delta.len() as f64
}
