use crate::content::intent::ContentIntent;
use crate::content::state::ContentState;
use crate::content::AnalysisTask;
use crate::mvi::Reducer;

pub struct ContentReducer;

impl Reducer for ContentReducer {
    type State = ContentState;
    type Intent = ContentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContentIntent::Start => ContentState {
                loading_fifteenth: true,
                loading_every_fifteenth: true,
                loading_word_count: true,
                ..ContentState::default()
            },
            ContentIntent::ContentLoaded { content } => ContentState {
                content: Some(content),
                ..state
            },
            ContentIntent::FetchFailed { message } => ContentState {
                loading_fifteenth: false,
                loading_every_fifteenth: false,
                loading_word_count: false,
                error: Some(message),
                ..state
            },
            ContentIntent::FifteenthCharReady(fifteenth_char) => ContentState {
                fifteenth_char,
                loading_fifteenth: false,
                ..state
            },
            ContentIntent::EveryFifteenthReady(every_fifteenth_chars) => ContentState {
                every_fifteenth_chars,
                loading_every_fifteenth: false,
                ..state
            },
            ContentIntent::WordCountsReady(word_counts) => ContentState {
                word_counts,
                loading_word_count: false,
                ..state
            },
            ContentIntent::TaskFailed { task, message } => {
                let mut state = state;
                state.set_task_loading(task, false);
                state.error = Some(task_error(task, &message));
                state
            }
            ContentIntent::ClearError => ContentState {
                error: None,
                ..state
            },
        }
    }
}

fn task_error(task: AnalysisTask, message: &str) -> String {
    format!("Error in {}: {}", task.label(), message)
}
