use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use warp::http::header::HeaderValue;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::Filter;
use crate::config::constants::{timeout_secs, CORS_MAX_AGE_SECS};
use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::server::forward_target::ForwardTarget;
use crate::server::proxy_rejection::ProxyRejection;
use crate::structs::config::proxy_config::ProxyConfig;
use crate::structs::proxy_envelope::ProxyEnvelope;

/// Forwards tracker REST calls, injecting Basic credentials taken from the
/// request envelope and adding cross-origin headers to every answer.
pub struct ProxyServer {
    state: Arc<ProxyState>,
}

struct ProxyState {
    config: ProxyConfig,
    client: Client,
}

impl ProxyServer {
    pub fn new(config: ProxyConfig) -> LabelscopeResult<Self> {
        let client = Client::builder()
            .timeout(timeout_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| LabelscopeError::config_error(&e.to_string(), Some("proxy"), None))?;

        Ok(Self {
            state: Arc::new(ProxyState { config, client }),
        })
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);
        let state_filter = warp::any().map(move || Arc::clone(&state));

        let forward = warp::post()
            .and(warp::body::bytes())
            .and(state_filter)
            .and_then(forward_handler);

        let fallback = warp::any().and_then(method_not_allowed_handler);

        forward.or(fallback).with(
            warp::cors()
                .allow_any_origin()
                .allow_methods(vec!["GET", "POST", "OPTIONS"])
                .allow_headers(vec!["content-type", "authorization"])
                .max_age(std::time::Duration::from_secs(CORS_MAX_AGE_SECS)),
        )
    }

    pub fn address(&self) -> LabelscopeResult<SocketAddr> {
        let raw = format!("{}:{}", self.state.config.bind, self.state.config.port);
        raw.parse().map_err(|_| {
            LabelscopeError::config_error(
                &format!("Invalid bind address '{}'", raw),
                Some("proxy.bind"),
                Some("Use an IP address such as 127.0.0.1"),
            )
        })
    }

    /// Serves until Ctrl+C.
    pub async fn run(self) -> LabelscopeResult<()> {
        let address = self.address()?;
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(address, async {
                tokio::signal::ctrl_c().await.ok();
            })
            .map_err(|e| LabelscopeError::config_error(&e.to_string(), Some("proxy.port"), Some("Pick a free port")))?;

        log::info!("🌐 Proxy listening on http://{}", bound);
        log::info!("🔒 Forwarding only to hosts ending with '{}'", self.state.config.allowed_host_suffix);
        log::info!("⏹️ Press Ctrl+C to stop the proxy");

        server.await;
        log::info!("✅ Proxy shutdown complete");
        Ok(())
    }
}

impl ProxyState {
    async fn forward(&self, body: &[u8]) -> Result<(StatusCode, String), ProxyRejection> {
        let envelope: ProxyEnvelope =
            serde_json::from_slice(body).map_err(|e| ProxyRejection::InvalidBody(e.to_string()))?;
        let target = ForwardTarget::resolve(envelope, &self.config)?;

        log::info!("➡️ {} {}", target.method, target.url);

        let mut request = self
            .client
            .request(target.method.clone(), &target.url)
            .basic_auth(&target.email, Some(&target.token))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = target.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProxyRejection::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProxyRejection::Transport(e.to_string()))?;

        if !status.is_success() {
            log::warn!("⚠️ Upstream answered {} for {}", status, target.url);
            return Err(ProxyRejection::Upstream { status: status.as_u16(), body: text });
        }

        let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::OK);
        Ok((status, text))
    }
}

async fn forward_handler(body: Bytes, state: Arc<ProxyState>) -> Result<warp::reply::Response, Infallible> {
    match state.forward(&body).await {
        Ok((status, text)) => Ok(json_response(status, text)),
        Err(rejection) => {
            if let ProxyRejection::Transport(details) = &rejection {
                log::error!("❌ Forwarding failed: {}", details);
            }
            Ok(json_response(rejection.status(), rejection.body().to_string()))
        }
    }
}

async fn method_not_allowed_handler() -> Result<warp::reply::Response, Infallible> {
    let rejection = ProxyRejection::MethodNotAllowed;
    Ok(json_response(rejection.status(), rejection.body().to_string()))
}

fn json_response(status: StatusCode, body: String) -> warp::reply::Response {
    let mut response = warp::reply::Response::new(body.into());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(warp::http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
