use chrono::NaiveDate;
use clap::Args;
use crate::structs::filter_state::{DateRange, FilterState};

/// Filter flags shared by `query` and `report`. Anything given here replaces
/// the persisted value for one run.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Updated on or after (YYYY-MM-DD)
    #[clap(long)]
    pub updated_from: Option<NaiveDate>,
    #[clap(long)]
    pub updated_to: Option<NaiveDate>,
    /// Created on or after (YYYY-MM-DD)
    #[clap(long)]
    pub created_from: Option<NaiveDate>,
    #[clap(long)]
    pub created_to: Option<NaiveDate>,
    /// Status id; repeat for several
    #[clap(long = "status")]
    pub statuses: Vec<String>,
    /// Assignee display name; repeat for several
    #[clap(long = "assignee")]
    pub assignees: Vec<String>,
    /// Domain label, e.g. `domene-1`
    #[clap(long)]
    pub domain: Option<String>,
    /// Ignore persisted filters
    #[clap(long)]
    pub reset: bool,
}

impl FilterArgs {
    /// Each given date bound, list or domain replaces its persisted
    /// counterpart. An empty `--domain ""` clears the persisted domain.
    pub fn apply(&self, persisted: FilterState) -> FilterState {
        let mut filters = if self.reset { FilterState::default() } else { persisted };

        filters.updated = DateRange::new(
            self.updated_from.or(filters.updated.from),
            self.updated_to.or(filters.updated.to),
        );
        filters.created = DateRange::new(
            self.created_from.or(filters.created.from),
            self.created_to.or(filters.created.to),
        );
        if !self.statuses.is_empty() {
            filters.statuses.clone_from(&self.statuses);
        }
        if !self.assignees.is_empty() {
            filters.assignees.clone_from(&self.assignees);
        }
        match self.domain.as_deref() {
            Some(domain) => filters.with_domain(Some(domain)),
            None => filters,
        }
    }
}
