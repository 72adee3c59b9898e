use serde::{Deserialize, Serialize};
use crate::helpers::serde_helper::SerdeHelper;
use crate::structs::raw_issue::RawIssue;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "SerdeHelper::null_as_default")]
    pub issues: Vec<RawIssue>,
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
    #[serde(rename = "isLast", default)]
    pub is_last: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// The token to continue with, if any. An empty token or `isLast: true`
    /// ends the walk.
    pub fn continuation(&self) -> Option<&str> {
        if self.is_last == Some(true) {
            return None;
        }
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}
