use crate::content::{AnalysisTask, ContentState};
use crate::report::join_chars;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsDialogState {
    #[default]
    Hidden,
    Visible {
        task: AnalysisTask,
        scroll: u16,
    },
}

impl UiState for ResultsDialogState {}

impl ResultsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn task(&self) -> Option<AnalysisTask> {
        match self {
            Self::Visible { task, .. } => Some(*task),
            Self::Hidden => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            Self::Visible { scroll, .. } => *scroll,
            Self::Hidden => 0,
        }
    }
}

/// Popup body for `task`, one entry per line.
pub fn result_lines(state: &ContentState, task: AnalysisTask) -> Vec<String> {
    match task {
        AnalysisTask::FifteenthChar => {
            let value = state
                .fifteenth_char
                .map_or_else(|| "-".to_string(), |c| join_chars(&[c]));
            vec![format!("15th character: '{}'", value)]
        }
        AnalysisTask::EveryFifteenthChar => vec![
            format!("{} characters:", state.every_fifteenth_chars.len()),
            join_chars(&state.every_fifteenth_chars),
        ],
        AnalysisTask::WordCount => state
            .top_words(usize::MAX)
            .into_iter()
            .map(|(word, count)| format!("{}: {}", word, count))
            .collect(),
    }
}
