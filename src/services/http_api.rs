use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;
use validator::Validate;

use crate::config::Config;
use crate::dto::application_dto::{ApplicationsResponse, PostApplicationRequest};
use crate::dto::common_dto::{ErrorBody, MessageResponse};
use crate::dto::job_dto::{JobFilter, JobResponse, JobsResponse, MyJobsResponse, PostJobRequest};
use crate::dto::user_dto::{
    AuthResponse, LoginRequest, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::error::{Error, Result};
use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::user::User;
use crate::services::api::JobBoardApi;

/// `JobBoardApi` over HTTP. The cookie store keeps the session cookie the
/// backend sets on login/register and sends it with every later request.
#[derive(Clone)]
pub struct HttpJobBoardApi {
    client: Client,
    base_url: Url,
}

impl HttpJobBoardApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let base_url = normalize_base_url(&config.api_base_url)?;
        tracing::info!("Job board API at {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn endpoint_with_id(&self, path: &str, id: &str) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "Sending request");
        self.client.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        decode(response).await
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;

    if status.is_success() {
        // A bare 200/204 carries no JSON; read it as an empty object.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_slice(b"{}")?);
        }
        return Ok(serde_json::from_slice(&body)?);
    }

    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    match message {
        Some(message) => {
            warn!(%url, status = status.as_u16(), "Backend rejected request: {}", message);
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
        None => {
            warn!(%url, status = status.as_u16(), "Backend returned an error without a message");
            Err(Error::UnexpectedResponse {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl JobBoardApi for HttpJobBoardApi {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        request.validate()?;
        let url = self.endpoint("api/v1/user/register")?;
        let form = request.into_form()?;
        self.send(self.request(Method::POST, url).multipart(form)).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        request.validate()?;
        let url = self.endpoint("api/v1/user/login")?;
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn get_user(&self) -> Result<User> {
        let url = self.endpoint("api/v1/user/getuser")?;
        let response: UserResponse = self.send(self.request(Method::GET, url)).await?;
        Ok(response.user)
    }

    async fn logout(&self) -> Result<MessageResponse> {
        let url = self.endpoint("api/v1/user/logout")?;
        self.send(self.request(Method::GET, url)).await
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<MessageResponse> {
        request.validate()?;
        let url = self.endpoint("api/v1/user/update/profile")?;
        let form = request.into_form()?;
        self.send(self.request(Method::PUT, url).multipart(form)).await
    }

    async fn update_password(&self, request: UpdatePasswordRequest) -> Result<MessageResponse> {
        request.validate()?;
        let url = self.endpoint("api/v1/user/update/password")?;
        self.send(self.request(Method::PUT, url).json(&request)).await
    }

    async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>> {
        let mut url = self.endpoint("api/v1/job/getall")?;
        filter.apply_to(&mut url);
        let response: JobsResponse = self.send(self.request(Method::GET, url)).await?;
        Ok(response.jobs)
    }

    async fn get_job(&self, id: &str) -> Result<Job> {
        let url = self.endpoint_with_id("api/v1/job/get", id)?;
        let response: JobResponse = self.send(self.request(Method::GET, url)).await?;
        Ok(response.job)
    }

    async fn post_job(&self, request: PostJobRequest) -> Result<MessageResponse> {
        request.validate()?;
        let url = self.endpoint("api/v1/job/post")?;
        self.send(self.request(Method::POST, url).json(&request)).await
    }

    async fn my_jobs(&self) -> Result<Vec<Job>> {
        let url = self.endpoint("api/v1/job/getmyjobs")?;
        let response: MyJobsResponse = self.send(self.request(Method::GET, url)).await?;
        Ok(response.my_jobs)
    }

    async fn delete_job(&self, id: &str) -> Result<MessageResponse> {
        let url = self.endpoint_with_id("api/v1/job/delete", id)?;
        self.send(self.request(Method::DELETE, url)).await
    }

    async fn employer_applications(&self) -> Result<Vec<Application>> {
        let url = self.endpoint("api/v1/application/employer/getall")?;
        let response: ApplicationsResponse = self.send(self.request(Method::GET, url)).await?;
        Ok(response.applications)
    }

    async fn job_seeker_applications(&self) -> Result<Vec<Application>> {
        let url = self.endpoint("api/v1/application/jobseeker/getall")?;
        let response: ApplicationsResponse = self.send(self.request(Method::GET, url)).await?;
        Ok(response.applications)
    }

    async fn post_application(
        &self,
        job_id: &str,
        request: PostApplicationRequest,
    ) -> Result<MessageResponse> {
        request.validate()?;
        let url = self.endpoint_with_id("api/v1/application/post", job_id)?;
        let form = request.into_form()?;
        self.send(self.request(Method::POST, url).multipart(form)).await
    }

    async fn delete_application(&self, id: &str) -> Result<MessageResponse> {
        let url = self.endpoint_with_id("api/v1/application/delete", id)?;
        self.send(self.request(Method::DELETE, url)).await
    }
}
