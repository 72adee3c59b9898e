use crate::config::constants::SEARCH_FIELDS;
use crate::enums::fetch_state::FetchState;
use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::services::response_classifier::ResponseClassifier;
use crate::structs::connection::Connection;
use crate::structs::issue::Issue;
use crate::structs::proxy_envelope::ProxyEnvelope;
use crate::structs::raw_issue::RawIssue;
use crate::structs::search_request::SearchRequest;
use crate::structs::search_response::SearchResponse;
use crate::traits::tracker_transport::TrackerTransport;

pub struct PaginatedFetcher;

impl PaginatedFetcher {
    pub async fn fetch_all(
        transport: &dyn TrackerTransport,
        connection: &Connection,
        query: &str,
        page_size: u32,
    ) -> LabelscopeResult<Vec<Issue>> {
        Self::fetch_all_with_progress(transport, connection, query, page_size, |_, _| {}).await
    }

    /// Follows continuation tokens until none is returned. `on_page` receives
    /// the page number and the running issue count. The first error aborts the
    /// walk and drops whatever was collected so far.
    pub async fn fetch_all_with_progress<F>(
        transport: &dyn TrackerTransport,
        connection: &Connection,
        query: &str,
        page_size: u32,
        mut on_page: F,
    ) -> LabelscopeResult<Vec<Issue>>
    where
        F: FnMut(usize, usize) + Send,
    {
        let mut issues: Vec<Issue> = Vec::new();
        let mut pages = 0usize;
        let mut state = FetchState::start();

        loop {
            state = match state {
                FetchState::Fetching { token } => {
                    match Self::fetch_page(transport, connection, query, page_size, token).await {
                        Ok(page) => {
                            pages += 1;
                            let next_token = page.continuation().map(ToString::to_string);
                            issues.extend(page.issues.into_iter().map(RawIssue::into_issue));
                            log::debug!("📄 Page {} fetched, {} issues so far", pages, issues.len());
                            on_page(pages, issues.len());
                            FetchState::after_page(next_token.as_deref())
                        }
                        Err(error) => FetchState::Failed(error),
                    }
                }
                FetchState::Done => {
                    log::info!("✅ Fetched {} issues in {} pages", issues.len(), pages);
                    return Ok(issues);
                }
                FetchState::Failed(error) => {
                    if !issues.is_empty() {
                        log::warn!("⚠️ Discarding {} issues from {} earlier pages", issues.len(), pages);
                    }
                    return Err(error);
                }
            };
        }
    }

    async fn fetch_page(
        transport: &dyn TrackerTransport,
        connection: &Connection,
        query: &str,
        page_size: u32,
        token: Option<String>,
    ) -> LabelscopeResult<SearchResponse> {
        let request = SearchRequest::new(query, SEARCH_FIELDS, page_size, token);
        let envelope = ProxyEnvelope::search(
            &connection.host,
            &connection.email,
            &connection.token,
            serde_json::to_value(&request)?,
        );

        let response = transport.send(&envelope).await?;
        let body = ResponseClassifier::classify(response)?;

        let mut page: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| LabelscopeError::malformed(format!("search response: {}", e)))?;

        if let Some(message) = page.error.take() {
            return Err(LabelscopeError::Tracker { message });
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
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

    fn page(start: usize, count: usize, token: Option<&str>) -> ProxyResponse {
        let issues: Vec<_> = (start..start + count)
            .map(|n| json!({
                "key": format!("PROJ-{}", n),
                "fields": { "summary": "s", "labels": ["tema-backend"], "assignee": { "displayName": "Kari" } }
            }))
            .collect();
        let mut body = json!({ "issues": issues });
        if let Some(token) = token {
            body["nextPageToken"] = json!(token);
        }
        ProxyResponse::new(200, body.to_string())
    }

    fn token_of(envelope: &ProxyEnvelope) -> Option<String> {
        envelope
            .request_body
            .as_ref()
            .and_then(|b| b.get("nextPageToken"))
            .and_then(|t| t.as_str())
            .map(ToString::to_string)
    }

    #[tokio::test]
    async fn two_pages_are_concatenated_in_order() {
        let mut transport = MockTrackerTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send()
            .withf(|envelope| token_of(envelope).is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(0, 100, Some("T2"))));
        transport
            .expect_send()
            .withf(|envelope| token_of(envelope).as_deref() == Some("T2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(100, 30, None)));

        let issues = PaginatedFetcher::fetch_all(&transport, &connection(), "project = PROJ", 100)
            .await
            .unwrap();

        assert_eq!(issues.len(), 130);
        assert_eq!(issues[0].key, "PROJ-0");
        assert_eq!(issues[129].key, "PROJ-129");
    }

    #[tokio::test]
    async fn request_carries_query_fields_and_page_size() {
        let mut transport = MockTrackerTransport::new();
        transport
            .expect_send()
            .withf(|envelope| {
                let body = envelope.request_body.as_ref().unwrap();
                body["jql"] == "project = PROJ"
                    && body["maxResults"] == json!(50)
                    && body["fields"] == json!(["key", "summary", "labels", "assignee"])
                    && envelope.jira_host.as_deref() == Some("team.atlassian.net")
                    && envelope.path.is_none()
            })
            .times(1)
            .returning(|_| Ok(page(0, 1, Some(""))));

        let issues = PaginatedFetcher::fetch_all(&transport, &connection(), "project = PROJ", 50)
            .await
            .unwrap();
        assert_eq!(issues.len(), 1);
    }

    #[tokio::test]
    async fn auth_failure_on_second_page_discards_first() {
        let mut transport = MockTrackerTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(page(0, 100, Some("T2"))));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ProxyResponse::new(401, r#"{"error":"unauthorized"}"#)));

        let result = PaginatedFetcher::fetch_all(&transport, &connection(), "q", 100).await;
        assert_eq!(result, Err(LabelscopeError::Auth));
    }

    #[tokio::test]
    async fn application_error_payload_is_surfaced() {
        let mut transport = MockTrackerTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(ProxyResponse::new(200, r#"{"error":"JQL is invalid"}"#)));

        let result = PaginatedFetcher::fetch_all(&transport, &connection(), "q", 100).await;
        assert_eq!(result, Err(LabelscopeError::Tracker { message: "JQL is invalid".to_string() }));
    }

    #[tokio::test]
    async fn unparseable_success_is_malformed() {
        let mut transport = MockTrackerTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(ProxyResponse::new(200, "<html>oops</html>")));

        let result = PaginatedFetcher::fetch_all(&transport, &connection(), "q", 100).await;
        assert!(matches!(result, Err(LabelscopeError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn transport_failure_stops_the_walk() {
        let mut transport = MockTrackerTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(LabelscopeError::unreachable("connection refused")));

        let result = PaginatedFetcher::fetch_all(&transport, &connection(), "q", 100).await;
        assert!(result.unwrap_err().is_transport());
    }

    #[tokio::test]
    async fn progress_is_reported_per_page() {
        let mut transport = MockTrackerTransport::new();
        let mut seq = Sequence::new();
        transport.expect_send().times(1).in_sequence(&mut seq).returning(|_| Ok(page(0, 3, Some("T2"))));
        transport.expect_send().times(1).in_sequence(&mut seq).returning(|_| Ok(page(3, 2, None)));

        let mut seen = Vec::new();
        PaginatedFetcher::fetch_all_with_progress(&transport, &connection(), "q", 3, |p, n| seen.push((p, n)))
            .await
            .unwrap();
        assert_eq!(seen, vec![(1, 3), (2, 5)]);
    }
}
