use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub const fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Query parameters for one report. Passed explicitly into the query builder;
/// persistence happens elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub updated: DateRange,
    #[serde(default)]
    pub created: DateRange,
    /// Status ids, in selection order.
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl FilterState {
    pub fn with_statuses<S: Into<String>>(mut self, statuses: impl IntoIterator<Item = S>) -> Self {
        self.statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assignees<S: Into<String>>(mut self, assignees: impl IntoIterator<Item = S>) -> Self {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    pub const fn with_updated(mut self, range: DateRange) -> Self {
        self.updated = range;
        self
    }

    pub const fn with_created(mut self, range: DateRange) -> Self {
        self.created = range;
        self
    }

    pub fn with_domain(mut self, domain: Option<&str>) -> Self {
        self.domain = domain.filter(|d| !d.is_empty()).map(ToString::to_string);
        self
    }
}
