//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Build a vocabulary-learning curriculum from a text corpus.
///
/// Greedily selects sentences that teach the most frequent unknown
/// vocabulary while introducing at most a budgeted number of new words
/// per sentence.
#[derive(Parser, Debug)]
#[command(name = "curriculum", version)]
pub struct Cli {
    /// Corpus text file to learn from.
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Report)]
    pub format: Format,

    /// Maximum number of curriculum steps. Defaults per format:
    /// report 200, html 50, anki 21.
    #[arg(long)]
    pub count: Option<usize>,

    /// Most new words allowed per selected sentence.
    #[arg(long, default_value_t = 8.0)]
    pub max_complexity: f64,

    /// Stop once the best remaining sentence teaches at most this
    /// fraction of the corpus.
    #[arg(long, default_value_t = 1e-4)]
    pub epsilon: f64,

    /// Source language of the corpus (anki format only).
    #[arg(long, default_value = "Hebrew")]
    pub from: String,

    /// Target language for translations (anki format only).
    #[arg(long, default_value = "Russian")]
    pub to: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plaintext coverage report.
    Report,
    /// Standalone HTML card document.
    Html,
    /// Anki-importable cloze lines with word-by-word translations.
    Anki,
}

impl Format {
    pub fn default_count(self) -> usize {
        match self {
            Format::Report => 200,
            Format::Html => 50,
            Format::Anki => 21,
        }
    }
}

impl Cli {
    pub fn count(&self) -> usize {
        self.count.unwrap_or_else(|| self.format.default_count())
    }
}
