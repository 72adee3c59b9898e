use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = ".labelscope";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_TOKEN_ENV: &str = "JIRA_API_TOKEN";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 5000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_PROXY_BIND: &str = "127.0.0.1";
pub const DEFAULT_PROXY_PORT: u16 = 8787;
pub const DEFAULT_ALLOWED_HOST_SUFFIX: &str = ".atlassian.net";
pub const DEFAULT_UPSTREAM_SCHEME: &str = "https";
pub const CORS_MAX_AGE_SECS: u64 = 86_400;

pub const SEARCH_PATH: &str = "/rest/api/3/search/jql";
pub const SEARCH_FIELDS: &[&str] = &["key", "summary", "labels", "assignee"];

pub const DOMAIN_CATEGORY: &str = "domene";

pub const PROGRESS_TICK_MS: u64 = 150;

pub fn project_statuses_path(project: &str) -> String {
    format!("/rest/api/3/project/{}/statuses", project)
}

pub const fn timeout_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
