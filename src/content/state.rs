use std::collections::HashMap;

use serde::Serialize;

use crate::content::AnalysisTask;
use crate::mvi::UiState;

/// Everything the presentation layer renders for one session.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContentState {
    pub loading_fifteenth: bool,
    pub loading_every_fifteenth: bool,
    pub loading_word_count: bool,
    pub fifteenth_char: Option<char>,
    pub every_fifteenth_chars: Vec<char>,
    pub word_counts: HashMap<String, usize>,
    pub content: Option<String>,
    /// Latest error; a newer one replaces it.
    pub error: Option<String>,
}

impl UiState for ContentState {}

impl ContentState {
    pub fn is_loading(&self) -> bool {
        self.loading_fifteenth || self.loading_every_fifteenth || self.loading_word_count
    }

    pub fn is_idle(&self) -> bool {
        !self.is_loading()
    }

    pub fn is_task_loading(&self, task: AnalysisTask) -> bool {
        match task {
            AnalysisTask::FifteenthChar => self.loading_fifteenth,
            AnalysisTask::EveryFifteenthChar => self.loading_every_fifteenth,
            AnalysisTask::WordCount => self.loading_word_count,
        }
    }

    /// True once the task has something worth showing.
    pub fn has_result(&self, task: AnalysisTask) -> bool {
        match task {
            AnalysisTask::FifteenthChar => self.fifteenth_char.is_some(),
            AnalysisTask::EveryFifteenthChar => !self.every_fifteenth_chars.is_empty(),
            AnalysisTask::WordCount => !self.word_counts.is_empty(),
        }
    }

    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Most frequent words, ties broken alphabetically.
    pub fn top_words(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> = self
            .word_counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(limit);
        words
    }

    pub(crate) fn set_task_loading(&mut self, task: AnalysisTask, loading: bool) {
        match task {
            AnalysisTask::FifteenthChar => self.loading_fifteenth = loading,
            AnalysisTask::EveryFifteenthChar => self.loading_every_fifteenth = loading,
            AnalysisTask::WordCount => self.loading_word_count = loading,
        }
    }
}
