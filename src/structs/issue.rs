use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub labels: Vec<String>,
    pub assignee: Option<String>,
}

impl Issue {
    /// Labels form a set: repeats are dropped, first occurrence wins.
    pub fn new(key: &str, summary: &str, labels: Vec<String>, assignee: Option<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }

        Self {
            key: key.to_string(),
            summary: summary.to_string(),
            labels: unique,
            assignee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_labels_collapse() {
        let issue = Issue::new(
            "P-1",
            "",
            vec!["tema-backend".to_string(), "tema-api".to_string(), "tema-backend".to_string()],
            None,
        );
        assert_eq!(issue.labels, vec!["tema-backend", "tema-api"]);
    }
}
