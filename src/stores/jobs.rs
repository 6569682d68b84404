use std::sync::Arc;

use super::{failure_message, RequestStatus, StoreCell};
use crate::dto::job_dto::{JobFilter, PostJobRequest};
use crate::models::job::Job;
use crate::services::api::JobBoardApi;

const FETCH_JOBS_FAILED: &str = "Could not fetch jobs.";
const FETCH_JOB_FAILED: &str = "Could not fetch job details.";
const POST_JOB_FAILED: &str = "Could not post job.";
const MY_JOBS_FAILED: &str = "Could not fetch your jobs.";
const DELETE_JOB_FAILED: &str = "Could not delete job.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobState {
    pub status: RequestStatus,
    pub jobs: Vec<Job>,
    pub single_job: Option<Job>,
    pub my_jobs: Vec<Job>,
}

impl JobState {
    fn list_requested(&mut self) {
        self.status.loading = true;
        self.status.error = None;
    }

    fn command_requested(&mut self) {
        self.status = RequestStatus {
            loading: true,
            error: None,
            message: None,
        };
    }

    fn my_jobs_requested(&mut self) {
        self.list_requested();
        self.my_jobs.clear();
    }

    fn succeeded(&mut self) {
        self.status.loading = false;
        self.status.error = None;
    }

    fn command_succeeded(&mut self, message: Option<String>) {
        self.succeeded();
        self.status.message = message;
    }

    fn failed(&mut self, error: String) {
        self.status.loading = false;
        self.status.error = Some(error);
    }

    fn command_failed(&mut self, error: String) {
        self.failed(error);
        self.status.message = None;
    }

    fn clear_errors(&mut self) {
        self.status.error = None;
    }

    fn reset(&mut self) {
        self.status = RequestStatus::default();
        self.single_job = None;
    }
}

/// Job listing, job detail and the signed-in employer's postings.
#[derive(Clone)]
pub struct JobStore {
    api: Arc<dyn JobBoardApi>,
    cell: StoreCell<JobState>,
}

impl JobStore {
    pub fn new(api: Arc<dyn JobBoardApi>) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub fn state(&self) -> JobState {
        self.cell.snapshot()
    }

    /// Lists jobs. `"All"` (or an empty string) for `city` or `niche` drops
    /// that constraint; the two are independent.
    pub async fn fetch_jobs(&self, city: &str, niche: &str, search_keyword: &str) {
        self.fetch_filtered(JobFilter::new(city, niche, search_keyword)).await
    }

    pub async fn fetch_filtered(&self, filter: JobFilter) {
        let token = self.cell.begin(JobState::list_requested);
        let result = self.api.list_jobs(filter).await;
        self.cell.complete(token, |s| match result {
            Ok(jobs) => {
                s.succeeded();
                s.jobs = jobs;
            }
            Err(err) => s.failed(failure_message("list_jobs", &err, FETCH_JOBS_FAILED)),
        });
    }

    /// On failure the previously loaded job stays in place.
    pub async fn fetch_single_job(&self, id: &str) {
        let token = self.cell.begin(JobState::command_requested);
        let result = self.api.get_job(id).await;
        self.cell.complete(token, |s| match result {
            Ok(job) => {
                s.succeeded();
                s.single_job = Some(job);
            }
            Err(err) => s.failed(failure_message("get_job", &err, FETCH_JOB_FAILED)),
        });
    }

    /// Reports only a message; re-fetch lists to see the new posting.
    pub async fn post_job(&self, request: PostJobRequest) {
        let token = self.cell.begin(JobState::command_requested);
        let result = self.api.post_job(request).await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.command_succeeded(response.message),
            Err(err) => s.command_failed(failure_message("post_job", &err, POST_JOB_FAILED)),
        });
    }

    /// Empties `my_jobs` as soon as it is dispatched.
    pub async fn get_my_jobs(&self) {
        let token = self.cell.begin(JobState::my_jobs_requested);
        let result = self.api.my_jobs().await;
        self.cell.complete(token, |s| match result {
            Ok(jobs) => {
                s.succeeded();
                s.my_jobs = jobs;
            }
            Err(err) => s.failed(failure_message("my_jobs", &err, MY_JOBS_FAILED)),
        });
    }

    /// Does not touch `jobs` or `my_jobs`; callers re-fetch.
    pub async fn delete_job(&self, id: &str) {
        let token = self.cell.begin(JobState::command_requested);
        let result = self.api.delete_job(id).await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.command_succeeded(response.message),
            Err(err) => s.command_failed(failure_message("delete_job", &err, DELETE_JOB_FAILED)),
        });
    }

    pub fn clear_errors(&self) {
        self.cell.update(JobState::clear_errors);
    }

    /// Clears status and the selected job; `jobs` and `my_jobs` are kept.
    pub fn reset(&self) {
        self.cell.update(JobState::reset);
    }
}
