pub mod commands;
pub mod fetch_state;
