use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelscopeError {
    // Tracker rejections
    Auth,
    ProjectNotFound,
    AccessDenied {
        message: Option<String>,
    },
    Upstream {
        status: u16,
        body: String,
    },
    Tracker {
        message: String,
    },

    // Transport errors
    ProxyUnreachable {
        reason: String,
    },
    MalformedResponse {
        reason: String,
    },

    // Configuration errors
    Configuration {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    FileOperation {
        path: String,
        operation: String,
        reason: String,
    },

    // Session errors
    RefreshInProgress,
}

impl LabelscopeError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn file_error(path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            path: path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::ProxyUnreachable { reason: reason.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse { reason: reason.into() }
    }

    /// True when the proxy could not be reached at all, as opposed to the
    /// tracker (or the proxy) answering with a rejection.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ProxyUnreachable { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Auth => "Wrong e-mail or API token".to_string(),
            Self::ProjectNotFound => "Project not found. Check the project key.".to_string(),
            Self::AccessDenied { message } => message
                .clone()
                .unwrap_or_else(|| "Access denied".to_string()),
            Self::Upstream { status, body } => {
                if body.trim().is_empty() {
                    format!("Error from proxy: {}", status)
                } else {
                    format!("Error from proxy: {} ({})", status, body.trim())
                }
            }
            Self::Tracker { message } => message.clone(),
            Self::ProxyUnreachable { reason } => {
                format!("Could not reach the proxy: {}\n💡 Check that the proxy URL is correct", reason)
            }
            Self::MalformedResponse { reason } => {
                format!("Unexpected response from proxy: {}", reason)
            }
            Self::Configuration { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::FileOperation { path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, path, reason)
            }
            Self::RefreshInProgress => "A refresh is already running".to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for LabelscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for LabelscopeError {}

/// Result type alias for labelscope operations
pub type LabelscopeResult<T> = Result<T, LabelscopeError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &LabelscopeError) {
        log::error!("{}", error.technical_details());

        if error.is_transport() {
            eprintln!("🔌 {}", error.user_message());
        } else {
            eprintln!("❌ {}", error.user_message());
        }
    }
}

impl From<std::io::Error> for LabelscopeError {
    fn from(error: std::io::Error) -> Self {
        Self::FileOperation {
            path: String::new(),
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LabelscopeError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse {
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for LabelscopeError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Check the syntax of the configuration file".to_string()),
        }
    }
}

impl From<toml::ser::Error> for LabelscopeError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Configuration {
            message: error.to_string(),
            field: None,
            suggestion: None,
        }
    }
}
