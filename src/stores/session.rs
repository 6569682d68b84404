use std::sync::Arc;

use super::{failure_message, RequestStatus, StoreCell};
use crate::dto::user_dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::user::{Role, User};
use crate::services::api::JobBoardApi;

const REGISTER_FAILED: &str = "Registration failed.";
const LOGIN_FAILED: &str = "Login failed.";
const FETCH_USER_FAILED: &str = "Could not load your account.";
const LOGOUT_FAILED: &str = "Logout failed.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub status: RequestStatus,
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl SessionState {
    fn auth_requested(&mut self) {
        self.status = RequestStatus {
            loading: true,
            error: None,
            message: None,
        };
        self.is_authenticated = false;
        self.user = None;
    }

    fn auth_succeeded(&mut self, response: AuthResponse) {
        self.status = RequestStatus {
            loading: false,
            error: None,
            message: response.message,
        };
        self.is_authenticated = true;
        self.user = Some(response.user);
    }

    fn auth_failed(&mut self, error: String) {
        self.status = RequestStatus {
            loading: false,
            error: Some(error),
            message: None,
        };
        self.is_authenticated = false;
        self.user = None;
    }

    fn fetch_user_requested(&mut self) {
        self.status.loading = true;
        self.status.error = None;
        self.is_authenticated = false;
        self.user = None;
    }

    fn fetch_user_succeeded(&mut self, user: User) {
        self.status.loading = false;
        self.status.error = None;
        self.is_authenticated = true;
        self.user = Some(user);
    }

    fn fetch_user_failed(&mut self, error: String) {
        self.status.loading = false;
        self.status.error = Some(error);
        self.is_authenticated = false;
        self.user = None;
    }

    fn logout_succeeded(&mut self, message: Option<String>) {
        self.status.loading = false;
        self.status.error = None;
        self.status.message = message;
        self.is_authenticated = false;
        self.user = None;
    }

    fn logout_failed(&mut self, error: String) {
        self.status.loading = false;
        self.status.error = Some(error);
    }

    fn clear_errors(&mut self) {
        self.status.error = None;
    }
}

/// Authenticated identity: register, login, current user, logout.
#[derive(Clone)]
pub struct SessionStore {
    api: Arc<dyn JobBoardApi>,
    cell: StoreCell<SessionState>,
}

impl SessionStore {
    pub fn new(api: Arc<dyn JobBoardApi>) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.read(|s| s.is_authenticated)
    }

    pub fn role(&self) -> Option<Role> {
        self.cell.read(|s| s.user.as_ref().map(|u| u.role))
    }

    pub async fn register(&self, request: RegisterRequest) {
        let token = self.cell.begin(SessionState::auth_requested);
        let result = self.api.register(request).await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.auth_succeeded(response),
            Err(err) => s.auth_failed(failure_message("register", &err, REGISTER_FAILED)),
        });
    }

    pub async fn login(&self, request: LoginRequest) {
        let token = self.cell.begin(SessionState::auth_requested);
        let result = self.api.login(request).await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.auth_succeeded(response),
            Err(err) => s.auth_failed(failure_message("login", &err, LOGIN_FAILED)),
        });
    }

    pub async fn get_current_user(&self) {
        let token = self.cell.begin(SessionState::fetch_user_requested);
        let result = self.api.get_user().await;
        self.cell.complete(token, |s| match result {
            Ok(user) => s.fetch_user_succeeded(user),
            Err(err) => s.fetch_user_failed(failure_message("get_user", &err, FETCH_USER_FAILED)),
        });
    }

    /// Logout has no loading phase of its own, but it supersedes any
    /// in-flight session request, so both outcomes settle `loading`. A
    /// failure keeps the current session.
    pub async fn logout(&self) {
        let token = self.cell.begin(|_| {});
        let result = self.api.logout().await;
        self.cell.complete(token, |s| match result {
            Ok(response) => s.logout_succeeded(response.message),
            Err(err) => s.logout_failed(failure_message("logout", &err, LOGOUT_FAILED)),
        });
    }

    pub fn clear_errors(&self) {
        self.cell.update(SessionState::clear_errors);
    }
}
