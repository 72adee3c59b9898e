use serde::{Deserialize, Serialize};
use crate::structs::config::connection_config::ConnectionConfig;
use crate::structs::config::filter_config::FilterConfig;
use crate::structs::config::proxy_config::ProxyConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub filters: FilterConfig,

    #[serde(default)]
    pub proxy: ProxyConfig,
}
