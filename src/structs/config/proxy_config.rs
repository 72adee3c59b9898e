use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    #[serde(default = "ConfigHelper::default_proxy_bind")]
    pub bind: String,

    #[serde(default = "ConfigHelper::default_proxy_port")]
    pub port: u16,

    /// Only tracker hosts ending with this suffix are forwarded to.
    #[serde(default = "ConfigHelper::default_allowed_host_suffix")]
    pub allowed_host_suffix: String,

    #[serde(default = "ConfigHelper::default_upstream_scheme")]
    pub upstream_scheme: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind: ConfigHelper::default_proxy_bind(),
            port: ConfigHelper::default_proxy_port(),
            allowed_host_suffix: ConfigHelper::default_allowed_host_suffix(),
            upstream_scheme: ConfigHelper::default_upstream_scheme(),
            upstream_timeout_secs: ConfigHelper::default_request_timeout_secs(),
        }
    }
}
