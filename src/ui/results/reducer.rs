use crate::mvi::Reducer;
use crate::ui::results::intent::ResultsIntent;
use crate::ui::results::state::ResultsDialogState;

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsDialogState;
    type Intent = ResultsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultsIntent::Open { task } => ResultsDialogState::Visible { task, scroll: 0 },
            ResultsIntent::Close => ResultsDialogState::Hidden,
            ResultsIntent::ScrollUp => match state {
                ResultsDialogState::Visible { task, scroll } => ResultsDialogState::Visible {
                    task,
                    scroll: scroll.saturating_sub(1),
                },
                other => other,
            },
            ResultsIntent::ScrollDown { max } => match state {
                ResultsDialogState::Visible { task, scroll } => ResultsDialogState::Visible {
                    task,
                    scroll: scroll.saturating_add(1).min(max),
                },
                other => other,
            },
        }
    }
}
