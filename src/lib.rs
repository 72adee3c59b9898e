pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
