pub mod config_helper;
pub mod label_display;
pub mod serde_helper;
