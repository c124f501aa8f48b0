//! Corpus builder: sentence splitting, word tokenization, frequency stats.
//!
//! A corpus is built once from raw text and never mutated afterwards.
//! Sentences end on runs of `.`, `?` or `!`; words are maximal runs of
//! letters and digits, lower-cased. Sentences with no words are excluded.

use crate::error::{CorpusError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]+").expect("Invalid sentence terminator regex"));

// Captures the span that starts and ends on a letter, dropping leading
// and trailing punctuation, digits and whitespace.
static DISPLAY_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\p{L}]*([\p{L}].*?[\p{L}])[^\p{L}]*$").expect("Invalid display span regex")
});

/// A single candidate sentence.
#[derive(Debug, Clone, Serialize)]
pub struct Sentence {
    /// Human-presentable form: original script, trimmed to start and end
    /// on a letter. May be empty for degenerate sentences ("I.").
    pub display_text: String,
    /// Normalized lower-cased words, in sentence order.
    pub tokens: Vec<String>,
}

/// The full candidate set plus derived frequency statistics.
#[derive(Debug, Clone)]
pub struct Corpus {
    sentences: Vec<Sentence>,
    word_count: HashMap<String, u64>,
    total_words: u64,
}

impl Corpus {
    /// Build a corpus from raw text.
    ///
    /// Fails with [`CorpusError::Empty`] when no sentence yields at least
    /// one word, which would leave the usefulness fraction undefined.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut sentences = Vec::new();
        let mut word_count: HashMap<String, u64> = HashMap::new();
        let mut total_words = 0u64;

        for segment in split_sentences(text) {
            let tokens = words(segment);
            if tokens.is_empty() {
                continue;
            }
            for word in &tokens {
                *word_count.entry(word.clone()).or_insert(0) += 1;
                total_words += 1;
            }
            sentences.push(Sentence {
                display_text: display_text(segment),
                tokens,
            });
        }

        if sentences.is_empty() || total_words == 0 {
            return Err(CorpusError::Empty);
        }

        Ok(Self {
            sentences,
            word_count,
            total_words,
        })
    }

    /// Sentences in original text order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Occurrences of `word` across all sentences (0 if absent).
    pub fn word_count(&self, word: &str) -> u64 {
        self.word_count.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words in the corpus.
    pub fn distinct_words(&self) -> usize {
        self.word_count.len()
    }

    /// Total word occurrences across all sentences. Always positive.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }
}

/// Split text into sentence segments, each ending on its `[.?!]+` run.
/// Text after the last terminator is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        let segment = &text[start..m.end()];
        start = m.end();
        if !segment.is_empty() {
            segments.push(segment);
        }
    }
    segments
}

/// Strip quote marks and fold newlines before word extraction.
fn clean(segment: &str) -> String {
    segment
        .replace(['“', '”', '‘', '’', '"'], "")
        .replace("\r\n", " ")
        .replace('\n', " ")
        .trim()
        .to_string()
}

fn is_separator(c: char) -> bool {
    !c.is_alphabetic() && !c.is_numeric() && c != '’'
}

/// Extract normalized words from a sentence segment.
fn words(segment: &str) -> Vec<String> {
    clean(segment)
        .split(is_separator)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Presentable form of a sentence: newlines folded to spaces, then
/// trimmed so it starts and ends on a letter. Empty when no such span
/// exists.
fn display_text(segment: &str) -> String {
    let folded = segment.replace("\r\n", " ").replace('\n', " ");
    DISPLAY_SPAN
        .captures(&folded)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
