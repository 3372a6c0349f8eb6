//! Model-View-Intent (MVI) primitives for shared, observable state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ StateStore::dispatch ──→ Reducer ──→ State ──→ subscribers
//!    ↑                                                        │
//!    └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every transition
//! - **Intent**: a patch produced by a command or a finished task
//! - **Reducer**: pure function that applies an intent to a state
//! - **StateStore**: applies intents one at a time against the latest
//!   snapshot and broadcasts the result

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Generation, StateStore};
