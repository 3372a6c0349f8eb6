use std::collections::HashMap;

use thiserror::Error;

use super::text;

/// Failure raised by a single analysis task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AnalysisError {
    message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The three analyses a session runs over fetched content.
///
/// Implementations are called from blocking worker threads, one call per
/// task, concurrently over the same text.
pub trait TextAnalyzer: Send + Sync + 'static {
    fn fifteenth_char(&self, text: &str) -> Result<Option<char>, AnalysisError>;

    fn every_fifteenth_char(&self, text: &str) -> Result<Vec<char>, AnalysisError>;

    fn word_counts(&self, text: &str) -> Result<HashMap<String, usize>, AnalysisError>;
}

/// Analyzer backed by the pure functions in [`text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAnalyzer;

impl TextAnalyzer for StandardAnalyzer {
    fn fifteenth_char(&self, text: &str) -> Result<Option<char>, AnalysisError> {
        Ok(text::fifteenth_char(text))
    }

    fn every_fifteenth_char(&self, text: &str) -> Result<Vec<char>, AnalysisError> {
        Ok(text::every_fifteenth_char(text))
    }

    fn word_counts(&self, text: &str) -> Result<HashMap<String, usize>, AnalysisError> {
        Ok(text::word_counts(text))
    }
}
