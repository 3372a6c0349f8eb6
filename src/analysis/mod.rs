//! Text analysis over fetched page content.
//!
//! The pure functions in [`text`] hold the rules. [`TextAnalyzer`] is the
//! seam the coordinator calls through, so sessions can run with analyzers
//! that fail or take their time.

mod analyzer;
pub mod text;

pub use analyzer::{AnalysisError, StandardAnalyzer, TextAnalyzer};
pub use text::{every_fifteenth_char, fifteenth_char, word_counts, CHAR_INDEX, CHAR_STRIDE};
