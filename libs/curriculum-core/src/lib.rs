//! Core curriculum library for greedy vocabulary acquisition.
//!
//! Provides:
//! - Corpus builder (sentence splitting, word tokenization, frequency stats)
//! - Knowledge model (known-word set, per-sentence deltas)
//! - Frequency-based usefulness and complexity scoring
//! - Greedy sentence selection and the curriculum driver
//!
//! The library is pure and synchronous: it accepts already-read text and
//! explicit numeric thresholds, and never touches the filesystem, the
//! network, or the environment.

pub mod corpus;
pub mod driver;
pub mod error;
pub mod knowledge;
pub mod scoring;
pub mod select;

pub use corpus::{Corpus, Sentence};
pub use driver::{build_curriculum, CurriculumConfig, CurriculumStep};
pub use error::{CorpusError, Result};
pub use knowledge::Knowledge;
pub use scoring::{complexity, usefulness};
pub use select::{best, Candidate};
