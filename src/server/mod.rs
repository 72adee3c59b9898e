pub mod proxy_rejection;
pub mod forward_target;
pub mod proxy_server;
