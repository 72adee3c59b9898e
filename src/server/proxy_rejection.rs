use serde_json::{json, Value};
use thiserror::Error;
use warp::http::StatusCode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProxyRejection {
    #[error("Use POST with a JSON body")]
    MethodNotAllowed,
    #[error("Request body must be JSON: {0}")]
    InvalidBody(String),
    #[error("Missing required fields: jiraHost, email, token, and requestBody or path")]
    MissingFields,
    #[error("Invalid Jira host - must end with {0}")]
    HostNotAllowed(String),
    #[error("Invalid path - must start with '/'")]
    InvalidPath,
    #[error("Unsupported method: {0}")]
    InvalidMethod(String),
    #[error("Jira responded with {status}")]
    Upstream { status: u16, body: String },
    #[error("Proxy error")]
    Transport(String),
}

impl ProxyRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody(_)
            | Self::MissingFields
            | Self::HostNotAllowed(_)
            | Self::InvalidPath
            | Self::InvalidMethod(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            Self::Upstream { status, body } => json!({
                "error": self.to_string(),
                "status": status,
                "jiraResponse": body,
            }),
            Self::Transport(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}
