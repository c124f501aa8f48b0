//! Plaintext coverage report.

use curriculum_core::{Corpus, CurriculumStep};
use std::fmt::Write;

/// Render the report: corpus size header, column header, one line per
/// step showing cumulative knowledge size and corpus coverage.
pub fn render(corpus: &Corpus, steps: &[CurriculumStep]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} words in corpus", corpus.distinct_words());
    let _ = writeln!(out);
    let _ = writeln!(out, "sentences  words  word_percentage    sentence");
    for step in steps {
        let _ = writeln!(
            out,
            "{:9} {:6} {:>10} {:.1}% {:>2} {}",
            step.step,
            step.cumulative_complexity as u64,
            "",
            step.cumulative_usefulness * 100.0,
            "",
            step.display_text,
        );
    }
    out
}
