mod common;

use careerlink_client::{config::Config, views::catalog::JobCard, AppState};
use common::StubBackend;

fn app_state(backend: &StubBackend) -> AppState {
    AppState::new(&Config::new(&backend.base_url)).expect("app state")
}

#[tokio::test]
async fn fetch_jobs_sends_only_active_filters() {
    let backend = StubBackend::spawn().await;
    let state = app_state(&backend);

    let cases = [
        (("All", "All", ""), None),
        (("Mumbai", "All", "dev"), Some("searchKeyword=dev&city=Mumbai")),
        (("All", "DevOps", ""), Some("niche=DevOps")),
        (("", "", "  "), None),
        (
            ("Pune", "UI/UX Design", "rust dev"),
            Some("searchKeyword=rust+dev&city=Pune&niche=UI%2FUX+Design"),
        ),
    ];
    for ((city, niche, keyword), expected) in cases {
        state.jobs.fetch_jobs(city, niche, keyword).await;
        let sent = backend
            .last_request("/api/v1/job/getall")
            .expect("getall request");
        assert_eq!(sent.query.as_deref(), expected, "{city}/{niche}/{keyword}");
    }

    let jobs = state.jobs.state();
    assert!(!jobs.status.loading);
    assert!(jobs.status.error.is_none());
    assert_eq!(jobs.jobs.len(), 2);
    assert_eq!(jobs.jobs[0].salary, "90000");

    let card = JobCard::from(&jobs.jobs[0]);
    assert_eq!(card.badge, "Hiring Multiple Candidates");
    assert_eq!(card.posted_on.as_deref(), Some("2024-08-20"));
}

#[tokio::test]
async fn single_job_errors_keep_previous_detail() {
    let backend = StubBackend::spawn().await;
    let state = app_state(&backend);

    state.jobs.fetch_single_job("j1").await;
    assert_eq!(
        state.jobs.state().single_job.map(|j| j.id),
        Some("j1".to_string())
    );

    state.jobs.fetch_single_job("gone").await;
    let jobs = state.jobs.state();
    assert_eq!(jobs.status.error.as_deref(), Some("Job not found."));
    assert_eq!(jobs.single_job.map(|j| j.id), Some("j1".to_string()));

    state.jobs.clear_errors();
    state.jobs.fetch_single_job("missing").await;
    let jobs = state.jobs.state();
    assert_eq!(
        jobs.status.error.as_deref(),
        Some("Could not fetch job details.")
    );
    assert!(!jobs.status.loading);
}

#[tokio::test]
async fn my_jobs_are_empty_while_a_refresh_is_in_flight() {
    let mut backend = StubBackend::spawn().await;
    let state = app_state(&backend);

    backend.release_my_jobs.notify_one();
    state.jobs.get_my_jobs().await;
    backend.my_jobs_entered.recv().await.expect("first call");
    assert_eq!(state.jobs.state().my_jobs.len(), 1);

    let jobs = state.jobs.clone();
    let refresh = tokio::spawn(async move { jobs.get_my_jobs().await });
    backend.my_jobs_entered.recv().await.expect("second call");

    let in_flight = state.jobs.state();
    assert!(in_flight.status.loading);
    assert!(in_flight.my_jobs.is_empty());

    backend.release_my_jobs.notify_one();
    refresh.await.expect("refresh task");

    let done = state.jobs.state();
    assert!(!done.status.loading);
    assert_eq!(done.my_jobs.len(), 1);
    assert_eq!(done.my_jobs[0].title, "Platform Engineer");
}

#[tokio::test]
async fn delete_without_session_reports_backend_message() {
    let backend = StubBackend::spawn().await;
    let state = app_state(&backend);

    state.jobs.delete_job("j1").await;

    let jobs = state.jobs.state();
    assert_eq!(
        jobs.status.error.as_deref(),
        Some("User is not authenticated.")
    );
    assert!(jobs.status.message.is_none());
}
