use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub jql: String,
    pub fields: Vec<String>,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    #[serde(rename = "nextPageToken", skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl SearchRequest {
    pub fn new(jql: &str, fields: &[&str], max_results: u32, next_page_token: Option<String>) -> Self {
        Self {
            jql: jql.to_string(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            max_results,
            next_page_token,
        }
    }
}
