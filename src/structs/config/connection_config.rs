use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    #[serde(default)]
    pub proxy_url: String,

    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub project: String,

    /// Environment variable holding the API token. The token itself is never stored.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_page_size")]
    pub page_size: u32,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            proxy_url: String::new(),
            host: String::new(),
            email: String::new(),
            project: String::new(),
            token_env: ConfigHelper::default_token_env(),
            page_size: ConfigHelper::default_page_size(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
        }
    }
}
