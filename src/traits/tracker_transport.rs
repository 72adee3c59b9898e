use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::errors::LabelscopeResult;
use crate::structs::proxy_envelope::ProxyEnvelope;
use crate::structs::proxy_response::ProxyResponse;

/// One round trip to the forwarding proxy. Implementations only fail for
/// transport problems; HTTP statuses are handed back untouched.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TrackerTransport: Send + Sync {
    async fn send(&self, envelope: &ProxyEnvelope) -> LabelscopeResult<ProxyResponse>;
}
