//! Knowledge model: the set of words a learner is assumed to know.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of normalized words.
///
/// Two roles share this type: the cumulative knowledge state that the
/// curriculum driver grows one step at a time, and the ephemeral delta a
/// candidate sentence would add. Deltas are never mutated after
/// [`Knowledge::delta`] returns them; they are consumed by scoring and
/// applied at most once via [`Knowledge::learn`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knowledge {
    words: HashSet<String>,
}

impl Knowledge {
    /// Empty knowledge: the starting state of every curriculum run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct words of `tokens` not present in `self`.
    ///
    /// Pure; token order is irrelevant and duplicates collapse to one
    /// entry. The result is disjoint from `self` at the time of the call.
    pub fn delta(&self, tokens: &[String]) -> Knowledge {
        let words = tokens
            .iter()
            .filter(|w| !self.words.contains(*w))
            .cloned()
            .collect();
        Knowledge { words }
    }

    /// Add every word of `delta` to this knowledge.
    ///
    /// Idempotent: learning the same delta twice leaves the set unchanged.
    pub fn learn(&mut self, delta: &Knowledge) {
        for word in &delta.words {
            self.words.insert(word.clone());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the known words (no defined order).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for Knowledge {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Knowledge {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn knowledge(words: &[&str]) -> Knowledge {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn delta_contains_only_unknown_words() {
        let kn = knowledge(&["the", "cat"]);
        let delta = kn.delta(&tokens(&["the", "cat", "sat"]));
        assert_eq!(delta, knowledge(&["sat"]));
    }

    #[test]
    fn delta_is_disjoint_from_knowledge() {
        let kn = knowledge(&["a", "b", "c"]);
        let delta = kn.delta(&tokens(&["a", "b", "c", "d", "e"]));
        assert!(delta.words().all(|w| !kn.contains(w)));
    }

    #[test]
    fn delta_collapses_duplicates() {
        let kn = Knowledge::new();
        let delta = kn.delta(&tokens(&["the", "the", "cat", "the"]));
        assert_eq!(delta.len(), 2);
    }

    #[test]
    fn delta_ignores_token_order() {
        let kn = knowledge(&["sat"]);
        let a = kn.delta(&tokens(&["the", "cat", "sat"]));
        let b = kn.delta(&tokens(&["sat", "cat", "the"]));
        assert_eq!(a, b);
    }

    #[test]
    fn learn_is_idempotent() {
        let mut kn = knowledge(&["the"]);
        let delta = kn.delta(&tokens(&["cat", "sat"]));

        kn.learn(&delta);
        let once = kn.clone();
        kn.learn(&delta);
        assert_eq!(kn, once);
        assert_eq!(kn.len(), 3);
    }

    #[test]
    fn learn_empty_delta_is_noop() {
        let mut kn = knowledge(&["the", "cat"]);
        let before = kn.clone();
        kn.learn(&Knowledge::new());
        assert_eq!(kn, before);
    }
}
