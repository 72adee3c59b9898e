use crate::config::constants::{
    DEFAULT_ALLOWED_HOST_SUFFIX, DEFAULT_PAGE_SIZE, DEFAULT_PROXY_BIND, DEFAULT_PROXY_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_ENV, DEFAULT_UPSTREAM_SCHEME,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_token_env() -> String {
        DEFAULT_TOKEN_ENV.to_string()
    }

    pub const fn default_page_size() -> u32 {
        DEFAULT_PAGE_SIZE
    }

    pub const fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_proxy_bind() -> String {
        DEFAULT_PROXY_BIND.to_string()
    }

    pub const fn default_proxy_port() -> u16 {
        DEFAULT_PROXY_PORT
    }

    pub fn default_allowed_host_suffix() -> String {
        DEFAULT_ALLOWED_HOST_SUFFIX.to_string()
    }

    pub fn default_upstream_scheme() -> String {
        DEFAULT_UPSTREAM_SCHEME.to_string()
    }

    /// `https://team.atlassian.net/` -> `team.atlassian.net`
    pub fn normalize_host(host: &str) -> String {
        let trimmed = host.trim();
        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        without_scheme.trim_end_matches('/').to_string()
    }

    pub fn normalize_proxy_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    pub fn normalize_project(project: &str) -> String {
        project.trim().to_uppercase()
    }
}
