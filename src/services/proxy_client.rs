use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_secs;
use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::structs::proxy_envelope::ProxyEnvelope;
use crate::structs::proxy_response::ProxyResponse;
use crate::traits::tracker_transport::TrackerTransport;

/// HTTP transport to the forwarding proxy.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    proxy_url: String,
}

impl ProxyClient {
    pub fn new(proxy_url: &str, request_timeout_secs: u64) -> LabelscopeResult<Self> {
        let client = Client::builder()
            .timeout(timeout_secs(request_timeout_secs))
            .build()
            .map_err(|e| LabelscopeError::config_error(&e.to_string(), Some("connection"), None))?;

        Ok(Self {
            client,
            proxy_url: proxy_url.to_string(),
        })
    }

    fn describe(error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("request to {} timed out", error.url().map_or("proxy", |u| u.as_str()))
        } else {
            error.to_string()
        }
    }
}

#[async_trait]
impl TrackerTransport for ProxyClient {
    async fn send(&self, envelope: &ProxyEnvelope) -> LabelscopeResult<ProxyResponse> {
        let response = self
            .client
            .post(&self.proxy_url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| LabelscopeError::unreachable(Self::describe(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LabelscopeError::unreachable(Self::describe(&e)))?;

        Ok(ProxyResponse::new(status, body))
    }
}
