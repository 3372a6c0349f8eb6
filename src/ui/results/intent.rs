use crate::content::AnalysisTask;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResultsIntent {
    Open { task: AnalysisTask },
    Close,
    ScrollUp,
    ScrollDown { max: u16 },
}

impl Intent for ResultsIntent {}
