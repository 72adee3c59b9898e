pub mod cli;
pub mod config;
pub mod issue;
pub mod raw_issue;
pub mod search_request;
pub mod search_response;
pub mod proxy_envelope;
pub mod proxy_response;
pub mod status;
pub mod filter_state;
pub mod filter_args;
pub mod connection;
pub mod category_value_count;
pub mod assignee_count;
pub mod category_summary;
pub mod label_aggregate;
pub mod report_output;
