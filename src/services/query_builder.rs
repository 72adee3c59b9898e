use crate::structs::filter_state::FilterState;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct QueryBuilder;

impl QueryBuilder {
    /// Clauses always come in the same order; optional ones are skipped when
    /// their filter is empty. Values are inserted verbatim, so an embedded
    /// double quote produces a malformed clause.
    pub fn build(project: &str, filters: &FilterState) -> String {
        let mut jql = format!("project = {} AND labels IS NOT EMPTY", project);

        if !filters.statuses.is_empty() {
            jql.push_str(&format!(" AND status IN ({})", filters.statuses.join(", ")));
        }

        let date_clauses = [
            ("updated", ">=", filters.updated.from),
            ("updated", "<=", filters.updated.to),
            ("created", ">=", filters.created.from),
            ("created", "<=", filters.created.to),
        ];
        for (field, operator, date) in date_clauses {
            if let Some(date) = date {
                jql.push_str(&format!(" AND {} {} \"{}\"", field, operator, date.format(DATE_FORMAT)));
            }
        }

        if !filters.assignees.is_empty() {
            let quoted: Vec<String> = filters.assignees.iter().map(|a| format!("\"{}\"", a)).collect();
            jql.push_str(&format!(" AND assignee IN ({})", quoted.join(", ")));
        }

        if let Some(domain) = filters.domain.as_deref().filter(|d| !d.is_empty()) {
            jql.push_str(&format!(" AND labels = \"{}\"", domain));
        }

        jql.push_str(" ORDER BY updated DESC");
        jql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::structs::filter_state::DateRange;

    fn date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
    }

    #[test]
    fn empty_filters_give_minimal_query() {
        assert_eq!(
            QueryBuilder::build("PROJ", &FilterState::default()),
            "project = PROJ AND labels IS NOT EMPTY ORDER BY updated DESC"
        );
    }

    #[test]
    fn status_and_updated_start() {
        let filters = FilterState::default()
            .with_statuses(["10001"])
            .with_updated(DateRange::new(date("2024-01-01"), None));
        assert_eq!(
            QueryBuilder::build("PROJ", &filters),
            "project = PROJ AND labels IS NOT EMPTY AND status IN (10001) AND updated >= \"2024-01-01\" ORDER BY updated DESC"
        );
    }

    #[test]
    fn every_clause_in_fixed_order() {
        let filters = FilterState::default()
            .with_domain(Some("domene-1"))
            .with_assignees(["Kari Hansen", "ola.nordmann"])
            .with_created(DateRange::new(date("2024-02-01"), date("2024-02-29")))
            .with_updated(DateRange::new(date("2024-03-01"), date("2024-03-31")))
            .with_statuses(["3", "10001"]);

        assert_eq!(
            QueryBuilder::build("PROJ", &filters),
            "project = PROJ AND labels IS NOT EMPTY \
             AND status IN (3, 10001) \
             AND updated >= \"2024-03-01\" AND updated <= \"2024-03-31\" \
             AND created >= \"2024-02-01\" AND created <= \"2024-02-29\" \
             AND assignee IN (\"Kari Hansen\", \"ola.nordmann\") \
             AND labels = \"domene-1\" \
             ORDER BY updated DESC"
        );
    }

    #[test]
    fn only_range_end_set() {
        let filters = FilterState::default().with_created(DateRange::new(None, date("2023-12-31")));
        assert_eq!(
            QueryBuilder::build("ABC", &filters),
            "project = ABC AND labels IS NOT EMPTY AND created <= \"2023-12-31\" ORDER BY updated DESC"
        );
    }

    #[test]
    fn quotes_are_not_escaped() {
        let filters = FilterState::default().with_assignees(["O\"Brien"]);
        assert!(QueryBuilder::build("P", &filters).contains("assignee IN (\"O\"Brien\")"));
    }
}
