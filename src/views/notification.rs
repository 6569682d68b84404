//! One-shot toasts derived from store state.
//!
//! Each `take_*` function reads the store once, turns a pending error or
//! success into a [`Notification`], and acknowledges it so the same outcome
//! is not surfaced twice.

use crate::stores::{ApplicationStore, JobStore, ProfileStore, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

/// Errors are cleared. A success message resets the store status.
pub fn take_job_notice(store: &JobStore) -> Option<Notification> {
    let status = store.state().status;
    if let Some(error) = status.error {
        store.clear_errors();
        return Some(Notification::error(error));
    }
    let message = status.message?;
    store.reset();
    Some(Notification::success(message))
}

pub fn take_application_notice(store: &ApplicationStore) -> Option<Notification> {
    let status = store.state().status;
    if let Some(error) = status.error {
        store.clear_errors();
        return Some(Notification::error(error));
    }
    let message = status.message?;
    store.reset();
    Some(Notification::success(message))
}

/// Only session errors are surfaced; login and logout messages stay in
/// state for the caller.
pub fn take_session_error(store: &SessionStore) -> Option<Notification> {
    let error = store.state().status.error?;
    store.clear_errors();
    Some(Notification::error(error))
}

/// After a successful update the session user is re-fetched so it reflects
/// the change.
pub async fn take_profile_notice(
    profile: &ProfileStore,
    session: &SessionStore,
    success_text: &str,
) -> Option<Notification> {
    let state = profile.state();
    if let Some(error) = state.error {
        profile.clear_errors();
        return Some(Notification::error(error));
    }
    if !state.is_updated {
        return None;
    }
    profile.clear_errors();
    session.get_current_user().await;
    Some(Notification::success(success_text))
}
