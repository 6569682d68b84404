//! Client-side state for the job board.
//!
//! Each store owns one state struct behind a [`StoreCell`] and mutates it
//! only through its own operations. An operation applies its loading
//! transition when it is dispatched, awaits exactly one backend call, then
//! applies the success or failure transition. Failures never escape an
//! operation; they are recorded in the store's `error` field for the view to
//! surface and clear.

pub mod applications;
pub mod jobs;
pub mod profile;
pub mod session;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Error;

pub use applications::{ApplicationState, ApplicationStore};
pub use jobs::{JobState, JobStore};
pub use profile::{ProfileState, ProfileStore};
pub use session::{SessionState, SessionStore};

/// Loading / error / success-message triple shared by the session, job and
/// application stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Identifies one dispatch. Only the latest token a store issued may write
/// its result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct Slot<S> {
    state: S,
    latest: u64,
}

/// Shared, clonable handle to a store's state.
#[derive(Debug)]
pub struct StoreCell<S> {
    slot: Arc<Mutex<Slot<S>>>,
}

impl<S> Clone for StoreCell<S> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<S: Default> Default for StoreCell<S> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }
}

impl<S: Clone> StoreCell<S> {
    pub fn snapshot(&self) -> S {
        self.lock().state.clone()
    }
}

impl<S> StoreCell<S> {
    fn lock(&self) -> MutexGuard<'_, Slot<S>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues a new token and applies the dispatch-time transition. Any
    /// earlier in-flight request becomes stale.
    pub fn begin(&self, transition: impl FnOnce(&mut S)) -> RequestToken {
        let mut slot = self.lock();
        slot.latest += 1;
        transition(&mut slot.state);
        RequestToken(slot.latest)
    }

    /// Applies a completion transition if `token` is still the latest one.
    /// Returns whether it was applied.
    pub fn complete(&self, token: RequestToken, transition: impl FnOnce(&mut S)) -> bool {
        let mut slot = self.lock();
        if token.0 != slot.latest {
            tracing::debug!(
                token = token.0,
                latest = slot.latest,
                "Discarding stale response"
            );
            return false;
        }
        transition(&mut slot.state);
        true
    }

    /// Synchronous transitions (clear/reset) that do not issue a token.
    pub fn update(&self, transition: impl FnOnce(&mut S)) {
        transition(&mut self.lock().state);
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock().state)
    }
}

/// Turns a failed call into the text a store records.
fn failure_message(operation: &str, err: &Error, fallback: &str) -> String {
    tracing::debug!(operation, error = %err, "Store operation failed");
    err.user_message(fallback)
}
