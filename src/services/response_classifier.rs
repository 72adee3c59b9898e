use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::structs::proxy_response::ProxyResponse;

pub struct ResponseClassifier;

impl ResponseClassifier {
    /// Maps non-success statuses onto the error taxonomy and hands back the
    /// body of a successful response.
    pub fn classify(response: ProxyResponse) -> LabelscopeResult<String> {
        if response.is_success() {
            return Ok(response.body);
        }

        Err(match response.status {
            401 => LabelscopeError::Auth,
            404 => LabelscopeError::ProjectNotFound,
            403 => LabelscopeError::AccessDenied {
                message: response.error_message(),
            },
            status => LabelscopeError::Upstream {
                status,
                body: response.body,
            },
        })
    }
}
