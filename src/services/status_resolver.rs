use std::collections::HashSet;
use serde_json::Value;
use crate::config::constants::project_statuses_path;
use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::services::response_classifier::ResponseClassifier;
use crate::structs::connection::Connection;
use crate::structs::proxy_envelope::ProxyEnvelope;
use crate::structs::status::{RawIssueTypeStatuses, Status};
use crate::traits::tracker_transport::TrackerTransport;

pub struct StatusResolver;

impl StatusResolver {
    /// Statuses of the connection's project, one per id. Any failure yields an
    /// empty list: the result only seeds the default status filter.
    pub async fn resolve(transport: &dyn TrackerTransport, connection: &Connection) -> Vec<Status> {
        match Self::try_resolve(transport, connection).await {
            Ok(statuses) => {
                log::info!("🏷️ Found {} statuses for {}", statuses.len(), connection.project);
                statuses
            }
            Err(error) => {
                log::warn!("⚠️ Could not load statuses for {}: {}", connection.project, error);
                Vec::new()
            }
        }
    }

    async fn try_resolve(transport: &dyn TrackerTransport, connection: &Connection) -> LabelscopeResult<Vec<Status>> {
        let envelope = ProxyEnvelope::path(
            &connection.host,
            &connection.email,
            &connection.token,
            &project_statuses_path(&connection.project),
        );

        let response = transport.send(&envelope).await?;
        let body = ResponseClassifier::classify(response)?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| LabelscopeError::malformed(format!("status response: {}", e)))?;

        // Anything but a list of issue types counts as "no statuses".
        let issue_types: Vec<RawIssueTypeStatuses> = match value {
            Value::Array(_) => serde_json::from_value(value)?,
            _ => Vec::new(),
        };

        Ok(Self::flatten(issue_types))
    }

    /// Flattens the per-issue-type lists, keeping the first occurrence of each id.
    pub fn flatten(issue_types: Vec<RawIssueTypeStatuses>) -> Vec<Status> {
        let mut seen: HashSet<String> = HashSet::new();

        issue_types
            .into_iter()
            .flat_map(|issue_type| issue_type.statuses)
            .filter(|status| seen.insert(status.identity()))
            .map(|status| status.into_status())
            .collect()
    }

    /// Initial status selection: every status, in resolver order.
    pub fn default_selection(statuses: &[Status]) -> Vec<String> {
        statuses.iter().map(|s| s.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::structs::proxy_response::ProxyResponse;
    use crate::traits::tracker_transport::MockTrackerTransport;

    fn connection() -> Connection {
        Connection {
            proxy_url: "http://proxy.test".to_string(),
            host: "team.atlassian.net".to_string(),
            email: "me@example.com".to_string(),
            token: "token".to_string(),
            project: "PROJ".to_string(),
        }
    }

    fn respond_with(status: u16, body: String) -> MockTrackerTransport {
        let mut transport = MockTrackerTransport::new();
        transport
            .expect_send()
            .withf(|envelope| envelope.path.as_deref() == Some("/rest/api/3/project/PROJ/statuses"))
            .times(1)
            .returning(move |_| Ok(ProxyResponse::new(status, body.clone())));
        transport
    }

    #[tokio::test]
    async fn shared_status_appears_once() {
        let body = json!([
            { "name": "Task", "statuses": [
                { "id": "1", "name": "To Do", "statusCategory": { "name": "To Do" } },
                { "id": "3", "name": "Done", "statusCategory": { "name": "Done" } }
            ]},
            { "name": "Bug", "statuses": [
                { "id": "3", "name": "Done", "statusCategory": { "name": "Complete" } }
            ]}
        ]);
        let transport = respond_with(200, body.to_string());

        let statuses = StatusResolver::resolve(&transport, &connection()).await;

        assert_eq!(statuses.len(), 2);
        let done: Vec<_> = statuses.iter().filter(|s| s.id == "3").collect();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].category_name, "Done");
    }

    #[tokio::test]
    async fn null_status_list_skips_only_that_issue_type() {
        let body = json!([
            { "name": "Epic", "statuses": null },
            { "name": "Task", "statuses": [ { "id": "3", "name": "Done" } ] }
        ]);
        let transport = respond_with(200, body.to_string());

        let statuses = StatusResolver::resolve(&transport, &connection()).await;

        assert_eq!(StatusResolver::default_selection(&statuses), vec!["3"]);
    }

    #[tokio::test]
    async fn missing_id_falls_back_to_name() {
        let body = json!([
            { "statuses": [ { "name": "Review" }, { "name": "Review" }, { "id": 10002, "name": "QA" } ] }
        ]);
        let transport = respond_with(200, body.to_string());

        let statuses = StatusResolver::resolve(&transport, &connection()).await;

        assert_eq!(
            statuses,
            vec![
                Status { id: "Review".to_string(), name: "Review".to_string(), category_name: String::new() },
                Status { id: "10002".to_string(), name: "QA".to_string(), category_name: String::new() },
            ]
        );
    }

    #[tokio::test]
    async fn failures_degrade_to_empty() {
        assert!(StatusResolver::resolve(&respond_with(401, String::new()), &connection()).await.is_empty());
        assert!(StatusResolver::resolve(&respond_with(200, "not json".to_string()), &connection()).await.is_empty());
        assert!(StatusResolver::resolve(&respond_with(200, "{}".to_string()), &connection()).await.is_empty());

        let mut unreachable = MockTrackerTransport::new();
        unreachable
            .expect_send()
            .returning(|_| Err(LabelscopeError::unreachable("timed out")));
        assert!(StatusResolver::resolve(&unreachable, &connection()).await.is_empty());
    }

    #[test]
    fn every_status_is_selected_by_default() {
        let statuses = vec![
            Status { id: "1".to_string(), name: "To Do".to_string(), category_name: "To Do".to_string() },
            Status { id: "3".to_string(), name: "Done".to_string(), category_name: "Done".to_string() },
        ];
        assert_eq!(StatusResolver::default_selection(&statuses), vec!["1", "3"]);
    }
}
