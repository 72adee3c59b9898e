use serde::{Deserialize, Serialize};
use crate::structs::category_summary::CategorySummary;

/// One pie slice or bar: a counted value with its palette colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: usize,
    pub color: String,
}

/// Chart-ready view of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub summary: CategorySummary,
    pub values: Vec<ChartSlice>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assignees: Vec<ChartSlice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOutput {
    pub issue_count: usize,
    pub query: Option<String>,
    pub categories: Vec<CategoryReport>,
    pub assignee_choices: Vec<String>,
    pub domain_choices: Vec<String>,
}
