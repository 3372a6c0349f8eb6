//! Run independent blocking jobs and merge each result as it lands.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::task::JoinSet;

/// A unit of blocking work.
pub type Job<T> = Box<dyn FnOnce() -> T + Send + 'static>;

/// A job panicked instead of returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPanic {
    message: String,
}

impl JobPanic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "task panicked".to_string()
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for JobPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Runs every job on the blocking pool and hands its outcome to `sink`.
///
/// `sink` is called on the worker thread the moment a job finishes, so
/// outcomes arrive in completion order, not submission order. Resolves once
/// every job has reported. Dropping the future abandons jobs that have not
/// started; jobs already running still report to `sink`, which must drop
/// outcomes it no longer wants.
pub async fn fan_out<K, T, S>(jobs: Vec<(K, Job<T>)>, sink: S)
where
    K: Copy + fmt::Debug + Send + 'static,
    T: Send + 'static,
    S: Fn(K, Result<T, JobPanic>) + Send + Sync + 'static,
{
    let sink = Arc::new(sink);
    let mut set = JoinSet::new();

    for (key, job) in jobs {
        let sink = Arc::clone(&sink);
        set.spawn_blocking(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(job)).map_err(JobPanic::from_payload);
            sink(key, outcome);
        });
    }

    while let Some(joined) = set.join_next().await {
        if let Err(err) = joined {
            if !err.is_cancelled() {
                tracing::warn!(error = %err, "Fan-out worker did not finish");
            }
        }
    }
}
