#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Notify};

pub const SESSION_COOKIE: &str = "token=stub-session";
pub const PASSWORD: &str = "supersecret";

#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub cookie: Option<String>,
    pub fields: Vec<(String, String)>,
}

#[derive(Clone)]
struct Stub {
    log: Arc<Mutex<Vec<Recorded>>>,
    applications: Arc<Mutex<Vec<JsonValue>>>,
    my_jobs_entered: mpsc::UnboundedSender<()>,
    release_my_jobs: Arc<Notify>,
}

impl Stub {
    fn record(
        &self,
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        fields: Vec<(String, String)>,
    ) {
        let cookie = headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.log.lock().unwrap().push(Recorded {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            cookie,
            fields,
        });
    }
}

/// In-process stand-in for the job board backend, listening on an
/// ephemeral port.
pub struct StubBackend {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
    pub my_jobs_entered: mpsc::UnboundedReceiver<()>,
    pub release_my_jobs: Arc<Notify>,
}

impl StubBackend {
    pub async fn spawn() -> Self {
        let (entered_tx, entered_rx) = mpsc::unbounded_channel();
        let stub = Stub {
            log: Arc::default(),
            applications: Arc::default(),
            my_jobs_entered: entered_tx,
            release_my_jobs: Arc::new(Notify::new()),
        };
        let log = stub.log.clone();
        let release_my_jobs = stub.release_my_jobs.clone();

        let app = Router::new()
            .route("/api/v1/user/register", post(register))
            .route("/api/v1/user/login", post(login))
            .route("/api/v1/user/getuser", get(get_user))
            .route("/api/v1/user/logout", get(logout))
            .route("/api/v1/user/update/profile", put(update_profile))
            .route("/api/v1/user/update/password", put(update_password))
            .route("/api/v1/job/post", post(post_job))
            .route("/api/v1/job/getall", get(get_all_jobs))
            .route("/api/v1/job/get/:id", get(get_job))
            .route("/api/v1/job/getmyjobs", get(get_my_jobs))
            .route("/api/v1/job/delete/:id", delete(delete_job))
            .route("/api/v1/application/post/:id", post(post_application))
            .route(
                "/api/v1/application/jobseeker/getall",
                get(job_seeker_applications),
            )
            .with_state(stub);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{}", addr),
            log,
            my_jobs_entered: entered_rx,
            release_my_jobs,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_request(&self, path: &str) -> Option<Recorded> {
        self.requests().into_iter().rev().find(|r| r.path == path)
    }
}

pub fn job_json(id: &str, title: &str) -> JsonValue {
    json!({
        "_id": id,
        "title": title,
        "jobType": "Full-time",
        "location": "Baner, Pune",
        "city": "Pune",
        "companyName": "Acme",
        "introduction": "We build things.",
        "responsibilities": "Ship code. Review code",
        "qualifications": "Rust. SQL",
        "salary": 90000,
        "hiringMultipleCandidates": "Yes",
        "jobNiche": "Software Development",
        "jobPostedOn": "2024-08-20T09:30:00.000Z",
        "postedBy": "e1"
    })
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}

fn authenticated(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains(SESSION_COOKIE))
}

fn with_session(body: JsonValue) -> Response {
    (
        [(header::SET_COOKIE, format!("{}; Path=/; HttpOnly", SESSION_COOKIE))],
        Json(body),
    )
        .into_response()
}

async fn read_fields(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = match field.file_name().map(str::to_string) {
            Some(file_name) => file_name,
            None => field.text().await.unwrap_or_default(),
        };
        fields.push((name, value));
    }
    fields
}

fn field<'a>(fields: &'a [(String, String)], name: &str) -> &'a str {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

fn user_json(fields: &[(String, String)]) -> JsonValue {
    json!({
        "_id": "u1",
        "name": field(fields, "name"),
        "email": field(fields, "email"),
        "phone": field(fields, "phone").parse::<u64>().unwrap_or_default(),
        "address": field(fields, "address"),
        "role": field(fields, "role"),
        "niches": {
            "firstNiche": field(fields, "firstNiche"),
            "secondNiche": field(fields, "secondNiche"),
            "thirdNiche": field(fields, "thirdNiche")
        },
        "coverLetter": field(fields, "coverLetter"),
        "createdAt": "2024-08-18T10:00:00.000Z"
    })
}

async fn register(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let fields = read_fields(multipart).await;
    stub.record(&method, &uri, &headers, fields.clone());
    if field(&fields, "role") == "Job Seeker" && field(&fields, "firstNiche").is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Please provide your preferred job niches.");
    }
    with_session(json!({
        "success": true,
        "user": user_json(&fields),
        "message": "User registered."
    }))
}

async fn login(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    if body["password"] != PASSWORD {
        return error_body(StatusCode::BAD_REQUEST, "Invalid email or password.");
    }
    let fields = vec![
        ("name".to_string(), "Ravi Kumar".to_string()),
        ("email".to_string(), body["email"].as_str().unwrap_or_default().to_string()),
        ("role".to_string(), body["role"].as_str().unwrap_or_default().to_string()),
    ];
    with_session(json!({
        "success": true,
        "user": user_json(&fields),
        "message": "User logged in."
    }))
}

async fn get_user(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    let fields = vec![
        ("name".to_string(), "Asha Rao".to_string()),
        ("email".to_string(), "asha@example.com".to_string()),
        ("role".to_string(), "Job Seeker".to_string()),
    ];
    Json(json!({ "success": true, "user": user_json(&fields) })).into_response()
}

async fn get_all_jobs(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    Json(json!({
        "success": true,
        "jobs": [job_json("j1", "Rust Developer"), job_json("j2", "Site Reliability Engineer")],
        "count": 2
    }))
    .into_response()
}

async fn get_job(
    State(stub): State<Stub>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    match id.as_str() {
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "gone" => error_body(StatusCode::NOT_FOUND, "Job not found."),
        _ => Json(json!({ "success": true, "job": job_json(&id, "Rust Developer") })).into_response(),
    }
}

async fn get_my_jobs(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    let _ = stub.my_jobs_entered.send(());
    stub.release_my_jobs.notified().await;
    Json(json!({ "success": true, "myJobs": [job_json("j7", "Platform Engineer")] })).into_response()
}

async fn delete_job(
    State(stub): State<Stub>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    Json(json!({ "success": true, "message": format!("Job {} deleted.", id) })).into_response()
}

async fn post_application(
    State(stub): State<Stub>,
    Path(job_id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let fields = read_fields(multipart).await;
    stub.record(&method, &uri, &headers, fields.clone());
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    let mut applications = stub.applications.lock().unwrap();
    let id = format!("a{}", applications.len() + 1);
    applications.push(json!({
        "_id": id,
        "jobSeekerInfo": {
            "id": "u1",
            "name": field(&fields, "name"),
            "email": field(&fields, "email"),
            "phone": field(&fields, "phone"),
            "address": field(&fields, "address"),
            "coverLetter": field(&fields, "coverLetter"),
            "resume": { "public_id": "resumes/u1", "url": "https://files.example.test/resumes/u1.pdf" },
            "role": "Job Seeker"
        },
        "employerInfo": { "id": "e1", "role": "Employer" },
        "jobInfo": { "jobId": job_id, "jobTitle": "Rust Developer" }
    }));
    Json(json!({ "success": true, "message": "Application submitted." })).into_response()
}

async fn job_seeker_applications(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    let applications = stub.applications.lock().unwrap().clone();
    Json(json!({ "success": true, "applications": applications })).into_response()
}

async fn logout(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    (
        [(header::SET_COOKIE, "token=; Path=/; Max-Age=0".to_string())],
        Json(json!({ "success": true, "message": "Logged out successfully." })),
    )
        .into_response()
}

/// Answers with a bare 200 and no body.
async fn update_profile(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let fields = read_fields(multipart).await;
    stub.record(&method, &uri, &headers, fields);
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    StatusCode::OK.into_response()
}

/// Answers with 204 No Content.
async fn update_password(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> Response {
    stub.record(&method, &uri, &headers, Vec::new());
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    if body["oldPassword"] != PASSWORD {
        return error_body(StatusCode::BAD_REQUEST, "Old password is incorrect.");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn post_job(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> Response {
    let fields = ["title", "jobType", "jobNiche", "hiringMultipleCandidates"]
        .iter()
        .map(|k| (k.to_string(), body[*k].as_str().unwrap_or_default().to_string()))
        .collect();
    stub.record(&method, &uri, &headers, fields);
    if !authenticated(&headers) {
        return error_body(StatusCode::UNAUTHORIZED, "User is not authenticated.");
    }
    Json(json!({ "success": true, "message": "Job posted successfully." })).into_response()
}
