use std::collections::{BTreeSet, HashMap};
use crate::config::constants::DOMAIN_CATEGORY;
use crate::helpers::label_display::LabelDisplay;
use crate::services::label_parser::LabelParser;
use crate::structs::assignee_count::AssigneeCount;
use crate::structs::category_summary::CategorySummary;
use crate::structs::category_value_count::CategoryValueCount;
use crate::structs::issue::Issue;
use crate::structs::label_aggregate::LabelAggregate;

/// Counts keyed by string, remembering first-seen order.
#[derive(Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, key: &str) {
        if let Some(&position) = self.index.get(key) {
            self.entries[position].1 += 1;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), 1));
        }
    }

    /// Descending by count; `sort_by` is stable so ties stay in first-seen order.
    fn into_sorted(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(issues: &[Issue]) -> LabelAggregate {
        let mut categories: Vec<String> = Vec::new();
        let mut suffixes: HashMap<String, OrderedCounter> = HashMap::new();
        let mut assignees: HashMap<String, OrderedCounter> = HashMap::new();
        let mut issue_counts: HashMap<String, usize> = HashMap::new();

        for issue in issues {
            let mut seen_in_issue: Vec<&str> = Vec::new();

            for label in &issue.labels {
                let Some(parsed) = LabelParser::parse(label) else {
                    continue;
                };

                if !suffixes.contains_key(parsed.category) {
                    categories.push(parsed.category.to_string());
                }
                suffixes
                    .entry(parsed.category.to_string())
                    .or_default()
                    .add(parsed.suffix);

                if !seen_in_issue.contains(&parsed.category) {
                    seen_in_issue.push(parsed.category);
                }
            }

            for category in seen_in_issue {
                *issue_counts.entry(category.to_string()).or_insert(0) += 1;
                if let Some(assignee) = issue.assignee.as_deref() {
                    assignees.entry(category.to_string()).or_default().add(assignee);
                }
            }
        }

        let value_counts = suffixes
            .into_iter()
            .map(|(category, counter)| {
                let values = counter
                    .into_sorted()
                    .into_iter()
                    .map(|(suffix, value)| CategoryValueCount {
                        name: LabelDisplay::format_suffix(&suffix),
                        value,
                        raw_suffix: suffix,
                    })
                    .collect();
                (category, values)
            })
            .collect();

        let assignee_counts = assignees
            .into_iter()
            .map(|(category, counter)| {
                let values = counter
                    .into_sorted()
                    .into_iter()
                    .map(|(name, value)| AssigneeCount { name, value })
                    .collect();
                (category, values)
            })
            .collect();

        log::debug!("📊 Aggregated {} issues into {} categories", issues.len(), categories.len());

        LabelAggregate {
            categories,
            value_counts,
            assignee_counts,
            issue_counts,
        }
    }

    pub fn summaries(aggregate: &LabelAggregate) -> Vec<CategorySummary> {
        aggregate
            .categories
            .iter()
            .map(|category| CategorySummary {
                category: category.clone(),
                display_name: LabelDisplay::category_name(category),
                label_total: aggregate.label_total(category),
                issue_count: aggregate.issue_count(category),
            })
            .collect()
    }

    /// Assignees present in the issue set, sorted; the choices for the assignee filter.
    pub fn distinct_assignees(issues: &[Issue]) -> Vec<String> {
        issues
            .iter()
            .filter_map(|issue| issue.assignee.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Full `domene-*` labels present in the issue set, sorted.
    pub fn distinct_domains(issues: &[Issue]) -> Vec<String> {
        issues
            .iter()
            .flat_map(|issue| issue.labels.iter())
            .filter(|label| LabelParser::category_of(label) == Some(DOMAIN_CATEGORY))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::constants::demo_issues::demo_issues;

    fn issue(key: &str, labels: &[&str], assignee: Option<&str>) -> Issue {
        Issue::new(key, "", labels.iter().map(|l| (*l).to_string()).collect(), assignee.map(ToString::to_string))
    }

    #[test]
    fn counts_per_suffix_and_formats_names() {
        let issues = vec![
            issue("P-1", &["type-ny-funksjonalitet", "tema-backend"], Some("kari")),
            issue("P-2", &["type-ny-funksjonalitet"], None),
            issue("P-3", &["type-bug", "unlabelled"], Some("ola")),
        ];
        let aggregate = Aggregator::aggregate(&issues);

        assert_eq!(aggregate.categories, vec!["type", "tema"]);
        assert_eq!(
            aggregate.values("type"),
            &[
                CategoryValueCount { name: "Ny funksjonalitet".to_string(), value: 2, raw_suffix: "ny-funksjonalitet".to_string() },
                CategoryValueCount { name: "Bug".to_string(), value: 1, raw_suffix: "bug".to_string() },
            ]
        );
        assert!(!aggregate.value_counts.contains_key("unlabelled"));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let issues = vec![
            issue("P-1", &["tema-c", "tema-a", "tema-b"], None),
            issue("P-2", &["tema-b", "tema-a", "tema-c"], None),
            issue("P-3", &["tema-d"], None),
            issue("P-4", &["tema-d"], None),
            issue("P-5", &["tema-d"], None),
        ];
        let aggregate = Aggregator::aggregate(&issues);
        let order: Vec<&str> = aggregate.values("tema").iter().map(|v| v.raw_suffix.as_str()).collect();
        assert_eq!(order, vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn assignee_counted_once_per_issue_and_category() {
        let issues = vec![
            issue("P-1", &["tema-backend", "tema-frontend"], Some("kari")),
            issue("P-2", &["tema-backend"], Some("ola")),
            issue("P-3", &["tema-frontend"], Some("ola")),
            issue("P-4", &["type-bug"], Some("per")),
        ];
        let aggregate = Aggregator::aggregate(&issues);

        assert_eq!(
            aggregate.assignees("tema"),
            &[
                AssigneeCount { name: "ola".to_string(), value: 2 },
                AssigneeCount { name: "kari".to_string(), value: 1 },
            ]
        );
        assert_eq!(aggregate.label_total("tema"), 4);
        assert_eq!(aggregate.issue_count("tema"), 3);
    }

    #[test]
    fn assignee_ties_keep_first_seen_order() {
        let issues = vec![
            issue("P-1", &["tema-x"], Some("zed")),
            issue("P-2", &["tema-x"], Some("amy")),
            issue("P-3", &["tema-y"], Some("bob")),
        ];
        let aggregate = Aggregator::aggregate(&issues);
        let names: Vec<&str> = aggregate
            .assignees("tema")
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["zed", "amy", "bob"]);
    }

    #[test]
    fn unassigned_category_has_no_assignee_table() {
        let aggregate = Aggregator::aggregate(&[issue("P-1", &["tema-x"], None)]);
        assert!(!aggregate.assignee_counts.contains_key("tema"));
        assert_eq!(aggregate.issue_count("tema"), 1);
    }

    #[test]
    fn empty_input_gives_empty_aggregate() {
        assert!(Aggregator::aggregate(&[]).is_empty());
    }

    #[test]
    fn demo_set_figures() {
        let issues = demo_issues();
        let aggregate = Aggregator::aggregate(&issues);
        let summaries = Aggregator::summaries(&aggregate);

        assert_eq!(aggregate.categories, vec!["type", "domene", "tema"]);
        assert_eq!(aggregate.values("type")[0].raw_suffix, "ny-funksjonalitet");
        assert_eq!(aggregate.values("type")[0].value, 6);
        assert_eq!(aggregate.values("tema")[0].raw_suffix, "backend");
        assert_eq!(aggregate.values("tema")[0].value, 7);
        assert!(summaries.iter().all(|s| s.label_total == 15 && s.issue_count == 15));
        assert_eq!(summaries[1].display_name, "Domene");
    }

    #[test]
    fn filter_choices_are_sorted_and_distinct() {
        let issues = demo_issues();
        assert_eq!(Aggregator::distinct_assignees(&issues), vec!["kari.hansen", "ola.nordmann", "per.jensen"]);
        assert_eq!(Aggregator::distinct_domains(&issues), vec!["domene-1", "domene-2", "domene-3"]);
    }

    fn issue_strategy() -> impl Strategy<Value = Issue> {
        (
            prop::collection::vec("(type|tema|domene|x)(-[a-c]{1,2})?", 0..5),
            prop::option::of("(kari|ola|per)"),
        )
            .prop_map(|(labels, assignee)| Issue::new("P", "", labels, assignee))
    }

    proptest! {
        #[test]
        fn value_totals_match_label_pairs(issues in prop::collection::vec(issue_strategy(), 0..20)) {
            let aggregate = Aggregator::aggregate(&issues);
            for category in &aggregate.categories {
                let pairs = issues
                    .iter()
                    .flat_map(|i| i.labels.iter())
                    .filter(|l| LabelParser::category_of(l) == Some(category.as_str()))
                    .count();
                prop_assert_eq!(aggregate.label_total(category), pairs);
            }
        }

        #[test]
        fn assignee_counts_bounded_by_issue_count(issues in prop::collection::vec(issue_strategy(), 0..20)) {
            let aggregate = Aggregator::aggregate(&issues);
            for category in &aggregate.categories {
                let total: usize = aggregate.assignees(category).iter().map(|a| a.value).sum();
                prop_assert!(total <= aggregate.issue_count(category));
            }
        }

        #[test]
        fn lists_are_sorted_descending(issues in prop::collection::vec(issue_strategy(), 0..20)) {
            let aggregate = Aggregator::aggregate(&issues);
            for values in aggregate.value_counts.values() {
                prop_assert!(values.windows(2).all(|w| w[0].value >= w[1].value));
            }
            for values in aggregate.assignee_counts.values() {
                prop_assert!(values.windows(2).all(|w| w[0].value >= w[1].value));
            }
        }
    }
}
