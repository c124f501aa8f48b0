//! Output renderers for a computed curriculum.
//!
//! Renderers only consume [`CurriculumStep`] records; the curriculum is
//! fully computed before any rendering (or translation) starts, so a
//! rendering failure can never corrupt the selection state.

pub mod anki;
pub mod html;
pub mod report;
