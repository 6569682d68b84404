use std::sync::Arc;

use super::{failure_message, StoreCell};
use crate::dto::user_dto::{UpdatePasswordRequest, UpdateProfileRequest};
use crate::services::api::JobBoardApi;

const UPDATE_PROFILE_FAILED: &str = "Failed to update profile.";
const UPDATE_PASSWORD_FAILED: &str = "Failed to update password.";

/// Transient status of profile and password updates. Holds no user data;
/// re-fetch the session user to see the effect of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub loading: bool,
    pub error: Option<String>,
    pub is_updated: bool,
}

impl ProfileState {
    fn requested(&mut self) {
        self.loading = true;
        self.error = None;
        self.is_updated = false;
    }

    fn succeeded(&mut self) {
        self.loading = false;
        self.error = None;
        self.is_updated = true;
    }

    fn failed(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
        self.is_updated = false;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone)]
pub struct ProfileStore {
    api: Arc<dyn JobBoardApi>,
    cell: StoreCell<ProfileState>,
}

impl ProfileStore {
    pub fn new(api: Arc<dyn JobBoardApi>) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub fn state(&self) -> ProfileState {
        self.cell.snapshot()
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) {
        let token = self.cell.begin(ProfileState::requested);
        let result = self.api.update_profile(request).await;
        self.cell.complete(token, |s| match result {
            Ok(_) => s.succeeded(),
            Err(err) => s.failed(failure_message("update_profile", &err, UPDATE_PROFILE_FAILED)),
        });
    }

    pub async fn update_password(&self, request: UpdatePasswordRequest) {
        let token = self.cell.begin(ProfileState::requested);
        let result = self.api.update_password(request).await;
        self.cell.complete(token, |s| match result {
            Ok(_) => s.succeeded(),
            Err(err) => s.failed(failure_message(
                "update_password",
                &err,
                UPDATE_PASSWORD_FAILED,
            )),
        });
    }

    /// Resets loading, error and the updated flag. Used after surfacing
    /// either outcome.
    pub fn clear_errors(&self) {
        self.cell.update(ProfileState::reset);
    }
}
