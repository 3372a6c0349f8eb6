//! Observable state of a content-analysis session.

mod intent;
mod reducer;
mod state;
mod task;

pub use intent::ContentIntent;
pub use reducer::ContentReducer;
pub use state::ContentState;
pub use task::AnalysisTask;
