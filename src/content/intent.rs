use std::collections::HashMap;

use crate::content::AnalysisTask;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentIntent {
    /// New session: clear everything and raise all three loading flags.
    Start,
    /// Fetch finished; publish the raw text.
    ContentLoaded { content: String },
    /// Fetch raised. Terminal for the session.
    FetchFailed { message: String },
    FifteenthCharReady(Option<char>),
    EveryFifteenthReady(Vec<char>),
    WordCountsReady(HashMap<String, usize>),
    /// One analysis failed; the other two are unaffected.
    TaskFailed { task: AnalysisTask, message: String },
    ClearError,
}

impl Intent for ContentIntent {}
