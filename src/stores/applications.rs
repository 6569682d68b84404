use std::sync::Arc;

use super::{failure_message, RequestStatus, StoreCell};
use crate::dto::application_dto::PostApplicationRequest;
use crate::models::application::Application;
use crate::services::api::JobBoardApi;

const FETCH_APPLICATIONS_FAILED: &str = "Could not fetch applications.";
const POST_APPLICATION_FAILED: &str = "Could not submit application.";
const DELETE_APPLICATION_FAILED: &str = "Could not delete application.";

/// `applications` holds whichever list was fetched last: the employer's
/// received applications or the job seeker's own submissions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationState {
    pub status: RequestStatus,
    pub applications: Vec<Application>,
}

impl ApplicationState {
    fn list_requested(&mut self) {
        self.status.loading = true;
        self.status.error = None;
    }

    fn list_succeeded(&mut self, applications: Vec<Application>) {
        self.status.loading = false;
        self.status.error = None;
        self.applications = applications;
    }

    fn list_failed(&mut self, error: String) {
        self.status.loading = false;
        self.status.error = Some(error);
    }

    fn command_requested(&mut self) {
        self.status = RequestStatus {
            loading: true,
            error: None,
            message: None,
        };
    }

    fn command_succeeded(&mut self, message: Option<String>) {
        self.status = RequestStatus {
            loading: false,
            error: None,
            message,
        };
    }

    fn command_failed(&mut self, error: String) {
        self.status = RequestStatus {
            loading: false,
            error: Some(error),
            message: None,
        };
    }

    fn clear_errors(&mut self) {
        self.status.error = None;
    }

    fn reset(&mut self) {
        self.status = RequestStatus::default();
    }
}

#[derive(Clone)]
pub struct ApplicationStore {
    api: Arc<dyn JobBoardApi>,
    cell: StoreCell<ApplicationState>,
}

impl ApplicationStore {
    pub fn new(api: Arc<dyn JobBoardApi>) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub fn state(&self) -> ApplicationState {
        self.cell.snapshot()
    }

    /// Applications received for the signed-in employer's jobs.
    pub async fn fetch_employer_applications(&self) {
        let token = self.cell.begin(ApplicationState::list_requested);
        let result = self.api.employer_applications().await;
        self.cell.complete(token, |s| match result {
            Ok(applications) => s.list_succeeded(applications),
            Err(err) => s.list_failed(failure_message(
                "employer_applications",
                &err,
                FETCH_APPLICATIONS_FAILED,
            )),
        });
    }

    /// Applications the signed-in job seeker has submitted.
    pub async fn fetch_job_seeker_applications(&self) {
        let token = self.cell.begin(ApplicationState::list_requested);
        let result = self.api.job_seeker_applications().await;
        self.cell.complete(token, |s| match result {
            Ok(applications) => s.list_succeeded(applications),
            Err(err) => s.list_failed(failure_message(
                "job_seeker_applications",
                &err,
                FETCH_APPLICATIONS_FAILED,
            )),
        });
    }

    /// Success yields only a message; the new application appears after the
    /// next fetch.
    pub async fn post_application(&self, request: PostApplicationRequest, job_id: &str) {
        let token = self.cell.begin(ApplicationState::command_requested);
        let result = self.api.post_application(job_id, request).await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.command_succeeded(response.message),
            Err(err) => s.command_failed(failure_message(
                "post_application",
                &err,
                POST_APPLICATION_FAILED,
            )),
        });
    }

    pub async fn delete_application(&self, id: &str) {
        let token = self.cell.begin(ApplicationState::command_requested);
        let result = self.api.delete_application(id).await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.command_succeeded(response.message),
            Err(err) => s.command_failed(failure_message(
                "delete_application",
                &err,
                DELETE_APPLICATION_FAILED,
            )),
        });
    }

    pub fn clear_errors(&self) {
        self.cell.update(ApplicationState::clear_errors);
    }

    pub fn reset(&self) {
        self.cell.update(ApplicationState::reset);
    }
}
