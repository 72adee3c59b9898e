use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::helpers::serde_helper::SerdeHelper;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
    pub category_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawIssueTypeStatuses {
    #[serde(default, deserialize_with = "SerdeHelper::null_as_default")]
    pub statuses: Vec<RawStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatus {
    #[serde(default, deserialize_with = "SerdeHelper::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(rename = "statusCategory", default)]
    pub status_category: Option<RawStatusCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStatusCategory {
    #[serde(default)]
    pub name: Option<String>,
}

impl RawStatus {
    /// Identity used for deduplication: the id, or the name when the id is absent.
    pub fn identity(&self) -> String {
        match &self.id {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => self.name.clone(),
        }
    }

    pub fn into_status(self) -> Status {
        Status {
            id: self.identity(),
            category_name: self
                .status_category
                .and_then(|c| c.name)
                .unwrap_or_default(),
            name: self.name,
        }
    }
}
