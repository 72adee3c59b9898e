pub mod config;
pub mod connection_config;
pub mod filter_config;
pub mod proxy_config;
