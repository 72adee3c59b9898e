use std::fmt;
use reqwest::Method;
use crate::config::constants::SEARCH_PATH;
use crate::server::proxy_rejection::ProxyRejection;
use crate::structs::config::proxy_config::ProxyConfig;
use crate::structs::proxy_envelope::ProxyEnvelope;

/// Where and how a proxied request goes upstream.
#[derive(Clone, PartialEq, Eq)]
pub struct ForwardTarget {
    pub url: String,
    pub method: Method,
    pub body: Option<String>,
    pub email: String,
    pub token: String,
}

impl fmt::Debug for ForwardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardTarget")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl ForwardTarget {
    /// Validates an envelope. With `path` the request goes to that path using
    /// `method` (GET by default); otherwise `requestBody` is POSTed to search.
    pub fn resolve(envelope: ProxyEnvelope, config: &ProxyConfig) -> Result<Self, ProxyRejection> {
        let host = non_empty(envelope.jira_host).ok_or(ProxyRejection::MissingFields)?;
        let email = non_empty(envelope.email).ok_or(ProxyRejection::MissingFields)?;
        let token = non_empty(envelope.token).ok_or(ProxyRejection::MissingFields)?;
        let path = non_empty(envelope.path);

        if envelope.request_body.is_none() && path.is_none() {
            return Err(ProxyRejection::MissingFields);
        }

        if !host.ends_with(&config.allowed_host_suffix) || !is_plain_host(&host) {
            return Err(ProxyRejection::HostNotAllowed(config.allowed_host_suffix.clone()));
        }

        let body = envelope
            .request_body
            .as_ref()
            .map(serde_json::Value::to_string);

        let (path, method) = match path {
            Some(path) => {
                if !path.starts_with('/') {
                    return Err(ProxyRejection::InvalidPath);
                }
                let method = match non_empty(envelope.method) {
                    Some(name) => Method::from_bytes(name.to_uppercase().as_bytes())
                        .map_err(|_| ProxyRejection::InvalidMethod(name))?,
                    None => Method::GET,
                };
                (path, method)
            }
            None => (SEARCH_PATH.to_string(), Method::POST),
        };

        Ok(Self {
            url: format!("{}://{}{}", config.upstream_scheme, host, path),
            method,
            body,
            email,
            token,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_plain_host(host: &str) -> bool {
    host.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == ':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ProxyConfig {
        ProxyConfig::default()
    }

    #[test]
    fn search_body_goes_to_search_endpoint() {
        let envelope = ProxyEnvelope::search("team.atlassian.net", "me@example.com", "t", json!({ "jql": "x" }));
        let target = ForwardTarget::resolve(envelope, &config()).unwrap();

        assert_eq!(target.url, "https://team.atlassian.net/rest/api/3/search/jql");
        assert_eq!(target.method, Method::POST);
        assert_eq!(target.body.as_deref(), Some(r#"{"jql":"x"}"#));
    }

    #[test]
    fn path_defaults_to_get() {
        let envelope = ProxyEnvelope::path("team.atlassian.net", "me@example.com", "t", "/rest/api/3/project/P/statuses");
        let target = ForwardTarget::resolve(envelope, &config()).unwrap();

        assert_eq!(target.url, "https://team.atlassian.net/rest/api/3/project/P/statuses");
        assert_eq!(target.method, Method::GET);
        assert_eq!(target.body, None);
    }

    #[test]
    fn explicit_method_is_used() {
        let mut envelope = ProxyEnvelope::path("team.atlassian.net", "me@example.com", "t", "/rest/api/3/issue");
        envelope.method = Some("put".to_string());
        assert_eq!(ForwardTarget::resolve(envelope, &config()).unwrap().method, Method::PUT);
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let mut envelope = ProxyEnvelope::path("team.atlassian.net", "me@example.com", "t", "/x");
        envelope.token = Some(String::new());
        assert_eq!(ForwardTarget::resolve(envelope, &config()), Err(ProxyRejection::MissingFields));

        let envelope = ProxyEnvelope {
            jira_host: Some("team.atlassian.net".to_string()),
            email: Some("me@example.com".to_string()),
            token: Some("t".to_string()),
            ..ProxyEnvelope::default()
        };
        assert_eq!(ForwardTarget::resolve(envelope, &config()), Err(ProxyRejection::MissingFields));
    }

    #[test]
    fn foreign_hosts_are_rejected() {
        let envelope = ProxyEnvelope::path("evil.example.com", "me@example.com", "t", "/x");
        assert_eq!(
            ForwardTarget::resolve(envelope, &config()),
            Err(ProxyRejection::HostNotAllowed(".atlassian.net".to_string()))
        );

        let envelope = ProxyEnvelope::path("evil.com/.atlassian.net", "me@example.com", "t", "/x");
        assert!(matches!(ForwardTarget::resolve(envelope, &config()), Err(ProxyRejection::HostNotAllowed(_))));
    }

    #[test]
    fn relative_paths_are_rejected() {
        let envelope = ProxyEnvelope::path("team.atlassian.net", "me@example.com", "t", "@evil.com/x");
        assert_eq!(ForwardTarget::resolve(envelope, &config()), Err(ProxyRejection::InvalidPath));
    }
}
