//! Greedy sentence selection.

use crate::corpus::Corpus;
use crate::knowledge::Knowledge;
use crate::scoring::{complexity, usefulness};

/// The winning sentence of one selection round.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub display_text: String,
    pub tokens: Vec<String>,
    /// New words this sentence would teach, disjoint from the knowledge
    /// the selection ran against.
    pub delta: Knowledge,
    /// Usefulness of `delta` alone.
    pub usefulness: f64,
}

/// Find the sentence whose knowledge delta is most useful, among
/// sentences whose delta introduces at most `max_complexity` new words.
///
/// Scans the whole corpus in order, once. Ties resolve to the earliest
/// sentence: only a strictly higher usefulness replaces the incumbent.
/// A sentence over budget this round may still win a later round, once
/// grown knowledge has shrunk its delta.
///
/// Returns `None` when no sentence passes the complexity filter; the
/// caller must treat that as "nothing left to teach" and stop.
pub fn best(knowledge: &Knowledge, corpus: &Corpus, max_complexity: f64) -> Option<Candidate> {
    let mut winner: Option<Candidate> = None;
    let mut best_usefulness = f64::NEG_INFINITY;

    for sentence in corpus.sentences() {
        let delta = knowledge.delta(&sentence.tokens);
        if complexity(&delta) > max_complexity {
            continue;
        }
        let score = usefulness(&delta, corpus);
        if score > best_usefulness {
            best_usefulness = score;
            winner = Some(Candidate {
                display_text: sentence.display_text.clone(),
                tokens: sentence.tokens.clone(),
                delta,
                usefulness: score,
            });
        }
    }

    winner
}
