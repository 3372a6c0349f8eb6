//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_page;

use pagescan::analysis::{AnalysisError, StandardAnalyzer, TextAnalyzer};
use pagescan::content::{AnalysisTask, ContentState};
use pagescan::fetch::{ContentFetcher, ContentResponse, FetchError};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Page text whose analyses are easy to check by hand.
pub const SAMPLE: &str = "Hello world hello TC world. This is a test string for TC";

/// Returns the same content on every fetch, optionally after a delay.
pub struct StaticFetcher {
    content: String,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl StaticFetcher {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ContentFetcher for StaticFetcher {
    async fn fetch(&self) -> Result<ContentResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(ContentResponse::new(self.content.clone()))
    }
}

/// Fails every fetch with a hard error.
pub struct FailingFetcher {
    message: String,
}

impl FailingFetcher {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl ContentFetcher for FailingFetcher {
    async fn fetch(&self) -> Result<ContentResponse, FetchError> {
        Err(FetchError::Other(self.message.clone()))
    }
}

/// Serves queued `(delay, content)` pairs, one per fetch.
pub struct SequenceFetcher {
    responses: Mutex<VecDeque<(Duration, String)>>,
}

impl SequenceFetcher {
    pub fn new(responses: Vec<(Duration, &str)>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(delay, content)| (delay, content.to_string()))
                    .collect(),
            ),
        }
    }
}

impl ContentFetcher for SequenceFetcher {
    async fn fetch(&self) -> Result<ContentResponse, FetchError> {
        let next = self.responses.lock().pop_front();
        let (delay, content) = next.unwrap_or_default();
        tokio::time::sleep(delay).await;
        Ok(ContentResponse::new(content))
    }
}

/// Standard analyses with per-task delays, failures and panics injected.
#[derive(Default)]
pub struct ScriptedAnalyzer {
    delays: HashMap<AnalysisTask, Duration>,
    failures: HashMap<AnalysisTask, String>,
    panics: HashSet<AnalysisTask>,
}

impl ScriptedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, task: AnalysisTask, millis: u64) -> Self {
        self.delays.insert(task, Duration::from_millis(millis));
        self
    }

    pub fn fail(mut self, task: AnalysisTask, message: &str) -> Self {
        self.failures.insert(task, message.to_string());
        self
    }

    pub fn panic(mut self, task: AnalysisTask) -> Self {
        self.panics.insert(task);
        self
    }

    fn step(&self, task: AnalysisTask) -> Result<(), AnalysisError> {
        if let Some(delay) = self.delays.get(&task) {
            std::thread::sleep(*delay);
        }
        if self.panics.contains(&task) {
            panic!("{} blew up", task.label());
        }
        match self.failures.get(&task) {
            Some(message) => Err(AnalysisError::new(message.clone())),
            None => Ok(()),
        }
    }
}

impl TextAnalyzer for ScriptedAnalyzer {
    fn fifteenth_char(&self, text: &str) -> Result<Option<char>, AnalysisError> {
        self.step(AnalysisTask::FifteenthChar)?;
        StandardAnalyzer.fifteenth_char(text)
    }

    fn every_fifteenth_char(&self, text: &str) -> Result<Vec<char>, AnalysisError> {
        self.step(AnalysisTask::EveryFifteenthChar)?;
        StandardAnalyzer.every_fifteenth_char(text)
    }

    fn word_counts(&self, text: &str) -> Result<HashMap<String, usize>, AnalysisError> {
        self.step(AnalysisTask::WordCount)?;
        StandardAnalyzer.word_counts(text)
    }
}

/// Resolves with the first published state matching `pred`, or panics
/// after `timeout`.
pub async fn wait_until<P>(
    rx: &mut watch::Receiver<ContentState>,
    timeout: Duration,
    pred: P,
) -> ContentState
where
    P: FnMut(&ContentState) -> bool,
{
    tokio::time::timeout(timeout, rx.wait_for(pred))
        .await
        .expect("Timed out waiting for state")
        .expect("State channel closed")
        .clone()
}
