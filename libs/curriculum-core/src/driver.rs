//! Curriculum driver: repeated greedy selection with growing knowledge.

use crate::corpus::Corpus;
use crate::knowledge::Knowledge;
use crate::scoring::usefulness;
use crate::select::best;
use serde::Serialize;

/// Thresholds steering a curriculum run. Callers pass these explicitly;
/// the driver never reads configuration from the environment.
#[derive(Debug, Clone)]
pub struct CurriculumConfig {
    /// Most new words a learner tolerates per sentence (inclusive).
    pub max_complexity: f64,
    /// Upper bound on emitted steps.
    pub max_steps: usize,
    /// Stop once the best remaining delta is worth no more than this.
    /// Slightly above zero to absorb floating-point noise.
    pub epsilon: f64,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            max_complexity: 8.0,
            max_steps: 200,
            epsilon: 1e-4,
        }
    }
}

/// One emitted curriculum step.
#[derive(Debug, Clone, Serialize)]
pub struct CurriculumStep {
    /// 1-based step index.
    pub step: usize,
    pub display_text: String,
    pub tokens: Vec<String>,
    /// Fraction of corpus word occurrences covered by everything learned
    /// up to and including this step. Non-decreasing across steps.
    pub cumulative_usefulness: f64,
    /// Size of cumulative knowledge after this step. Non-decreasing.
    pub cumulative_complexity: f64,
}

/// Run the greedy loop to completion and return the ordered curriculum.
///
/// Starts from empty knowledge. Each round selects the best affordable
/// sentence, learns its delta, and emits a step. Stops when no candidate
/// passes the budget, when the best candidate teaches at most
/// `epsilon` worth of new vocabulary, or when `max_steps` is reached —
/// all of which are normal termination. Always terminates: knowledge
/// strictly grows, or the epsilon cut-off fires on the first step that
/// adds nothing.
pub fn build_curriculum(corpus: &Corpus, config: &CurriculumConfig) -> Vec<CurriculumStep> {
    let mut knowledge = Knowledge::new();
    let mut steps = Vec::new();

    for step in 1..=config.max_steps {
        let Some(candidate) = best(&knowledge, corpus, config.max_complexity) else {
            break;
        };
        if candidate.usefulness <= config.epsilon {
            break;
        }
        knowledge.learn(&candidate.delta);
        steps.push(CurriculumStep {
            step,
            display_text: candidate.display_text,
            tokens: candidate.tokens,
            cumulative_usefulness: usefulness(&knowledge, corpus),
            cumulative_complexity: knowledge.len() as f64,
        });
    }

    steps
}
