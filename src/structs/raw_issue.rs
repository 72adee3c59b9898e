use serde::{Deserialize, Serialize};
use crate::helpers::serde_helper::SerdeHelper;
use crate::structs::issue::Issue;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssue {
    #[serde(default, deserialize_with = "SerdeHelper::null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "SerdeHelper::null_as_default")]
    pub fields: RawFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub assignee: Option<RawAssignee>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssignee {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawIssue {
    /// The human display name wins over the login name; missing labels become
    /// an empty set.
    pub fn into_issue(self) -> Issue {
        let assignee = self.fields.assignee.and_then(|a| {
            a.display_name
                .filter(|n| !n.is_empty())
                .or_else(|| a.name.filter(|n| !n.is_empty()))
        });

        Issue::new(
            &self.key,
            self.fields.summary.as_deref().unwrap_or_default(),
            self.fields.labels.unwrap_or_default(),
            assignee,
        )
    }
}
