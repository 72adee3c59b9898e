use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::structs::assignee_count::AssigneeCount;
use crate::structs::category_value_count::CategoryValueCount;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAggregate {
    /// Categories in the order they were first seen.
    pub categories: Vec<String>,
    pub value_counts: HashMap<String, Vec<CategoryValueCount>>,
    pub assignee_counts: HashMap<String, Vec<AssigneeCount>>,
    /// Distinct issues carrying each category.
    pub issue_counts: HashMap<String, usize>,
}

impl LabelAggregate {
    pub fn values(&self, category: &str) -> &[CategoryValueCount] {
        self.value_counts.get(category).map_or(&[], Vec::as_slice)
    }

    pub fn assignees(&self, category: &str) -> &[AssigneeCount] {
        self.assignee_counts.get(category).map_or(&[], Vec::as_slice)
    }

    pub fn label_total(&self, category: &str) -> usize {
        self.values(category).iter().map(|v| v.value).sum()
    }

    pub fn issue_count(&self, category: &str) -> usize {
        self.issue_counts.get(category).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
