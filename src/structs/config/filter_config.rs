use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::structs::filter_state::{DateRange, FilterState};

/// Filter preferences as persisted between sessions.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_from: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_to: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
}

impl FilterConfig {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState::default()
            .with_updated(DateRange::new(self.updated_from, self.updated_to))
            .with_created(DateRange::new(self.created_from, self.created_to))
            .with_statuses(self.statuses.iter().cloned())
            .with_assignees(self.assignees.iter().cloned())
            .with_domain(self.domain.as_deref())
    }

    pub fn from_filter_state(filters: &FilterState) -> Self {
        Self {
            updated_from: filters.updated.from,
            updated_to: filters.updated.to,
            created_from: filters.created.from,
            created_to: filters.created.to,
            domain: filters.domain.clone(),
            statuses: filters.statuses.clone(),
            assignees: filters.assignees.clone(),
        }
    }
}
