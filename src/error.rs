use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {}", validation_summary(.0))]
    Validation(#[from] ValidationErrors),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response from backend (status {status})")]
    UnexpectedResponse { status: u16 },

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Text a store records for this failure. Only backend-provided messages
    /// and validation errors are shown verbatim.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::Validation(err) => validation_summary(err),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::UnexpectedResponse { status } => Some(*status),
            Error::Reqwest(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Joins the rule messages of every failed field, in field order. Rule
/// params are never formatted since they carry the rejected value.
fn validation_summary(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut messages: Vec<String> = Vec::new();
    for (field, field_errors) in fields {
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {}.", field.replace('_', " ")),
            };
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }
    messages.join(" ")
}
