//! Fetch → fan-out → merge orchestration.
//!
//! Each `load_content()` call starts a session: the state is reset, the
//! fetcher runs, and the three analyses are fanned out onto the blocking
//! pool. Every result is merged into the shared [`StateStore`] as its own
//! intent, tagged with the session's generation so a cancelled session can
//! never write into a newer one.

mod fan_out;

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::analysis::{AnalysisError, StandardAnalyzer, TextAnalyzer};
use crate::content::{AnalysisTask, ContentIntent, ContentReducer, ContentState};
use crate::fetch::ContentFetcher;
use crate::mvi::{Generation, StateStore};

pub use fan_out::{fan_out, Job, JobPanic};

type TaskOutcome = Result<ContentIntent, AnalysisError>;

/// Owns one UI session's content state and the work that fills it.
///
/// Dropping the coordinator ends the session: in-flight work is abandoned
/// and nothing it produces reaches the state afterwards.
pub struct AnalysisCoordinator<F, A = StandardAnalyzer> {
    inner: Arc<Inner<F, A>>,
    runtime: Handle,
    session: Mutex<Option<AbortHandle>>,
}

struct Inner<F, A> {
    fetcher: F,
    analyzer: Arc<A>,
    store: StateStore<ContentReducer>,
}

/// Completion handle for one `load_content()` call.
///
/// Dropping it does not cancel the session.
pub struct LoadHandle {
    generation: Generation,
    handle: JoinHandle<()>,
}

impl LoadHandle {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Waits until every task of the session has settled.
    ///
    /// Returns false if the session was cancelled before it got there.
    pub async fn finished(self) -> bool {
        self.handle.await.is_ok()
    }
}

impl<F: ContentFetcher> AnalysisCoordinator<F, StandardAnalyzer> {
    pub fn with_standard_analyzer(fetcher: F, runtime: Handle) -> Self {
        Self::new(fetcher, StandardAnalyzer, runtime)
    }
}

impl<F, A> AnalysisCoordinator<F, A>
where
    F: ContentFetcher,
    A: TextAnalyzer,
{
    pub fn new(fetcher: F, analyzer: A, runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher,
                analyzer: Arc::new(analyzer),
                store: StateStore::new(),
            }),
            runtime,
            session: Mutex::new(None),
        }
    }

    /// Starts a new session, cancelling the previous one.
    ///
    /// The reset is applied before this returns, so subscribers see all
    /// three loading flags raised immediately.
    pub fn load_content(&self) -> LoadHandle {
        let mut session = self.session.lock();
        let generation = self.inner.store.begin(ContentIntent::Start);
        if let Some(previous) = session.take() {
            previous.abort();
        }

        tracing::info!(generation = generation.value(), "Loading content");
        let inner = Arc::clone(&self.inner);
        let handle = self.runtime.spawn(inner.run_session(generation));
        *session = Some(handle.abort_handle());

        LoadHandle { generation, handle }
    }

    /// Dismisses the current error. Nothing else changes.
    pub fn clear_error(&self) {
        self.inner.store.dispatch(ContentIntent::ClearError);
    }

    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.inner.store.subscribe()
    }

    pub fn state(&self) -> ContentState {
        self.inner.store.snapshot()
    }

    /// Resolves with the first state that has no loading flag raised.
    pub async fn wait_idle(&self) -> ContentState {
        let mut rx = self.subscribe();
        let idle = rx.wait_for(ContentState::is_idle).await.map(|s| s.clone());
        match idle {
            Ok(state) => state,
            Err(_) => self.state(),
        }
    }

    /// Ends the session lifetime: in-flight work is aborted and any update
    /// it still produces is discarded.
    pub fn shutdown(&self) {
        let mut session = self.session.lock();
        self.inner.store.invalidate();
        if let Some(previous) = session.take() {
            previous.abort();
            tracing::debug!("Session cancelled");
        }
    }
}

impl<F, A> Inner<F, A>
where
    F: ContentFetcher,
    A: TextAnalyzer,
{
    async fn run_session(self: Arc<Self>, generation: Generation) {
        let started = Instant::now();
        tracing::debug!("Fetching content");

        let response = match self.fetcher.fetch().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "Fatal error while fetching content");
                self.store.dispatch_in(
                    generation,
                    ContentIntent::FetchFailed {
                        message: err.to_string(),
                    },
                );
                return;
            }
        };

        tracing::debug!(
            chars = response.char_len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Content fetched"
        );
        let text: Arc<str> = Arc::from(response.content.as_str());
        self.store.dispatch_in(
            generation,
            ContentIntent::ContentLoaded {
                content: response.content,
            },
        );
        if !self.store.is_current(generation) {
            return;
        }

        let jobs = self.jobs(&text);
        let inner = Arc::clone(&self);
        fan_out(jobs, move |task, outcome| inner.complete(generation, task, outcome)).await;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Content analysis finished"
        );
    }

    fn jobs(&self, text: &Arc<str>) -> Vec<(AnalysisTask, Job<TaskOutcome>)> {
        AnalysisTask::ALL
            .into_iter()
            .map(|task| {
                let analyzer = Arc::clone(&self.analyzer);
                let text = Arc::clone(text);
                let job: Job<TaskOutcome> = Box::new(move || run_task(&*analyzer, task, &text));
                (task, job)
            })
            .collect()
    }

    fn complete(
        &self,
        generation: Generation,
        task: AnalysisTask,
        outcome: Result<TaskOutcome, JobPanic>,
    ) {
        let intent = match outcome {
            Ok(Ok(intent)) => intent,
            Ok(Err(err)) => failed(task, err.message()),
            Err(panic) => failed(task, panic.message()),
        };
        if !self.store.dispatch_in(generation, intent) && !self.store.is_current(generation) {
            tracing::debug!(task = %task, "Dropped result of cancelled session");
        }
    }
}

fn failed(task: AnalysisTask, message: &str) -> ContentIntent {
    tracing::error!(task = %task, error = message, "Analysis task failed");
    ContentIntent::TaskFailed {
        task,
        message: message.to_string(),
    }
}

fn run_task<A: TextAnalyzer + ?Sized>(analyzer: &A, task: AnalysisTask, text: &str) -> TaskOutcome {
    let started = Instant::now();
    tracing::debug!(task = %task, "Processing started");

    let intent = match task {
        AnalysisTask::FifteenthChar => {
            ContentIntent::FifteenthCharReady(analyzer.fifteenth_char(text)?)
        }
        AnalysisTask::EveryFifteenthChar => {
            ContentIntent::EveryFifteenthReady(analyzer.every_fifteenth_char(text)?)
        }
        AnalysisTask::WordCount => ContentIntent::WordCountsReady(analyzer.word_counts(text)?),
    };

    tracing::debug!(
        task = %task,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Processing completed"
    );
    Ok(intent)
}

impl<F, A> Drop for AnalysisCoordinator<F, A> {
    fn drop(&mut self) {
        self.inner.store.invalidate();
        if let Some(previous) = self.session.get_mut().take() {
            previous.abort();
        }
    }
}
