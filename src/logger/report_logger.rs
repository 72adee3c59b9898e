use crate::helpers::label_display::LabelDisplay;
use crate::services::aggregator::Aggregator;
use crate::structs::issue::Issue;
use crate::structs::label_aggregate::LabelAggregate;
use crate::structs::report_output::{CategoryReport, ChartSlice, ReportOutput};

const NAME_WIDTH: usize = 24;
const BAR_WIDTH: usize = 30;

pub struct ReportLogger;

impl ReportLogger {
    /// Builds the report for every category, or only `focus` when given. The
    /// assignee cross-tab is included for the focused category only.
    pub fn build(issues: &[Issue], aggregate: &LabelAggregate, focus: Option<&str>, query: Option<String>) -> ReportOutput {
        let categories = Aggregator::summaries(aggregate)
            .into_iter()
            .filter(|summary| focus.map_or(true, |f| f == summary.category))
            .map(|summary| CategoryReport {
                values: aggregate
                    .values(&summary.category)
                    .iter()
                    .enumerate()
                    .map(|(index, v)| ChartSlice {
                        name: v.name.clone(),
                        value: v.value,
                        color: LabelDisplay::category_color(&summary.category, index).to_string(),
                    })
                    .collect(),
                assignees: if focus.is_some() {
                    aggregate
                        .assignees(&summary.category)
                        .iter()
                        .enumerate()
                        .map(|(index, a)| ChartSlice {
                            name: a.name.clone(),
                            value: a.value,
                            color: LabelDisplay::assignee_color(index).to_string(),
                        })
                        .collect()
                } else {
                    Vec::new()
                },
                summary,
            })
            .collect();

        ReportOutput {
            issue_count: issues.len(),
            query,
            categories,
            assignee_choices: Aggregator::distinct_assignees(issues),
            domain_choices: Aggregator::distinct_domains(issues),
        }
    }

    pub fn print(report: &ReportOutput) {
        println!("\n📋 {} issues", report.issue_count);
        if let Some(query) = &report.query {
            println!("🔎 {}", query);
        }
        println!("{}", "━".repeat(60));

        if report.categories.is_empty() {
            println!("⚠️ No categorised labels found.");
        }

        for category in &report.categories {
            let summary = &category.summary;
            println!(
                "\n📊 {}  ({} labels on {} issues)",
                summary.display_name, summary.label_total, summary.issue_count
            );
            if let Some(description) = LabelDisplay::category_description(&summary.category) {
                println!("   {}", description);
            }

            let rows: Vec<(&str, usize)> = category.values.iter().map(|v| (v.name.as_str(), v.value)).collect();
            Self::print_rows(&rows, summary.label_total);

            if !category.assignees.is_empty() {
                let total: usize = category.assignees.iter().map(|a| a.value).sum();
                println!("\n👥 Assignees ({})", summary.display_name);
                let rows: Vec<(&str, usize)> = category.assignees.iter().map(|a| (a.name.as_str(), a.value)).collect();
                Self::print_rows(&rows, total);
            }
        }

        if !report.assignee_choices.is_empty() {
            println!("\n👤 Assignees: {}", report.assignee_choices.join(", "));
        }
        if !report.domain_choices.is_empty() {
            let names: Vec<String> = report.domain_choices.iter().map(|d| LabelDisplay::domain_name(d)).collect();
            println!("🗂️ Domains: {}", names.join(", "));
        }
    }

    fn print_rows(rows: &[(&str, usize)], total: usize) {
        for (name, value) in rows {
            println!(
                "   {:<width$} {:>5}  {:>5}%  {}",
                name,
                value,
                Self::percent(*value, total),
                Self::bar(*value, total),
                width = NAME_WIDTH
            );
        }
    }

    /// One decimal, as shown in chart tooltips.
    pub fn percent(value: usize, total: usize) -> String {
        if total == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", value as f64 * 100.0 / total as f64)
    }

    fn bar(value: usize, total: usize) -> String {
        if total == 0 {
            return String::new();
        }
        "█".repeat((value * BAR_WIDTH).div_ceil(total))
    }
}
