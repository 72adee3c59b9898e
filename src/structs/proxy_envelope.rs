use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body the forwarding proxy accepts: tracker credentials plus either a
/// search body or an arbitrary REST path.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProxyEnvelope {
    #[serde(rename = "jiraHost", default)]
    pub jira_host: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "requestBody", default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ProxyEnvelope {
    pub fn search(host: &str, email: &str, token: &str, request_body: Value) -> Self {
        Self {
            jira_host: Some(host.to_string()),
            email: Some(email.to_string()),
            token: Some(token.to_string()),
            request_body: Some(request_body),
            path: None,
            method: None,
        }
    }

    pub fn path(host: &str, email: &str, token: &str, path: &str) -> Self {
        Self {
            jira_host: Some(host.to_string()),
            email: Some(email.to_string()),
            token: Some(token.to_string()),
            request_body: None,
            path: Some(path.to_string()),
            method: None,
        }
    }
}

impl fmt::Debug for ProxyEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyEnvelope")
            .field("jira_host", &self.jira_host)
            .field("email", &self.email)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("request_body", &self.request_body)
            .field("path", &self.path)
            .field("method", &self.method)
            .finish()
    }
}
