//! Single-writer state container.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::reducer::Reducer;

/// Session number a dispatch belongs to.
///
/// Dispatches tagged with an older generation than the store's current one
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Holds the latest state of reducer `R` and broadcasts every change.
///
/// Every transition runs inside the watch channel's write lock: the reducer
/// always sees the latest snapshot, so concurrent dispatches into disjoint
/// fields never overwrite each other. The generation counter is only read or
/// advanced under that same lock.
pub struct StateStore<R: Reducer> {
    tx: watch::Sender<R::State>,
    generation: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> StateStore<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            generation: AtomicU64::new(0),
            _reducer: PhantomData,
        }
    }

    /// Apply `intent` to the latest state regardless of generation.
    ///
    /// Returns true if the state changed (subscribers are only notified then).
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| apply::<R>(state, intent))
    }

    /// Apply `intent` only while `generation` is still current.
    ///
    /// Returns true if the state changed.
    pub fn dispatch_in(&self, generation: Generation, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation.0 {
                return false;
            }
            apply::<R>(state, intent)
        })
    }

    /// Start a new generation and apply `intent` as its first transition.
    ///
    /// Anything still holding an older generation is locked out from here on.
    pub fn begin(&self, intent: R::Intent) -> Generation {
        let mut started = Generation(0);
        self.tx.send_modify(|state| {
            started = Generation(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            *state = R::reduce(std::mem::take(state), intent);
        });
        started
    }

    /// Lock out the current generation without touching the state.
    pub fn invalidate(&self) {
        self.tx.send_if_modified(|_| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            false
        });
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation() == generation
    }

    /// Clone of the latest state.
    pub fn snapshot(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }
}

impl<R: Reducer> Default for StateStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn apply<R: Reducer>(state: &mut R::State, intent: R::Intent) -> bool {
    let next = R::reduce(state.clone(), intent);
    if next == *state {
        return false;
    }
    *state = next;
    true
}
