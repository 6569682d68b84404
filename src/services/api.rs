use async_trait::async_trait;

use crate::dto::application_dto::PostApplicationRequest;
use crate::dto::common_dto::MessageResponse;
use crate::dto::job_dto::{JobFilter, PostJobRequest};
use crate::dto::user_dto::{
    AuthResponse, LoginRequest, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest,
};
use crate::error::Result;
use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::user::User;

/// The backend's REST contract, one method per endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;
    async fn get_user(&self) -> Result<User>;
    async fn logout(&self) -> Result<MessageResponse>;
    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<MessageResponse>;
    async fn update_password(&self, request: UpdatePasswordRequest) -> Result<MessageResponse>;

    async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>>;
    async fn get_job(&self, id: &str) -> Result<Job>;
    async fn post_job(&self, request: PostJobRequest) -> Result<MessageResponse>;
    async fn my_jobs(&self) -> Result<Vec<Job>>;
    async fn delete_job(&self, id: &str) -> Result<MessageResponse>;

    async fn employer_applications(&self) -> Result<Vec<Application>>;
    async fn job_seeker_applications(&self) -> Result<Vec<Application>>;
    async fn post_application(
        &self,
        job_id: &str,
        request: PostApplicationRequest,
    ) -> Result<MessageResponse>;
    async fn delete_application(&self, id: &str) -> Result<MessageResponse>;
}
