use serde::{Deserialize, Serialize};

/// Header figures for one category. `label_total` sums the per-suffix counts,
/// so an issue carrying two suffixes adds two; `issue_count` counts the issue
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub display_name: String,
    pub label_total: usize,
    pub issue_count: usize,
}
