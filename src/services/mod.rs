pub mod label_parser;
pub mod aggregator;
pub mod query_builder;
pub mod response_classifier;
pub mod paginated_fetcher;
pub mod status_resolver;
pub mod proxy_client;
pub mod report_session;
