//! Result popup for one analysis task.

mod intent;
mod reducer;
mod state;

pub use intent::ResultsIntent;
pub use reducer::ResultsReducer;
pub use state::{result_lines, ResultsDialogState};
