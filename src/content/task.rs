use std::fmt;

/// One of the three independent analyses run per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisTask {
    FifteenthChar,
    EveryFifteenthChar,
    WordCount,
}

impl AnalysisTask {
    pub const ALL: [AnalysisTask; 3] = [
        AnalysisTask::FifteenthChar,
        AnalysisTask::EveryFifteenthChar,
        AnalysisTask::WordCount,
    ];

    /// Human-readable name used in error messages and the UI.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisTask::FifteenthChar => "15th Character",
            AnalysisTask::EveryFifteenthChar => "Every 15th Character",
            AnalysisTask::WordCount => "Word Count",
        }
    }
}

impl fmt::Display for AnalysisTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
