//! Executing `HttpRequest` values.
//!
//! `Transport` is the single I/O seam of the crate. `UreqTransport` is the
//! production implementation; tests plug in canned transports.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs one blocking HTTP round-trip.
///
/// Implementations return non-2xx responses as `Ok` data and reserve `Err`
/// for failures where no response was received; status interpretation
/// happens in `ZillowClient::parse`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with ureq's defaults and no overall timeout.
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        // Keep 4xx/5xx as data so the client owns status handling.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_timeout(config.timeout)
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let uri = request.uri();
        let mut builder = self.agent.get(uri.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|e| {
            tracing::debug!(url = %request.url, error = %e, "transport failure");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Zillow;
    use crate::client::ZillowClient;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn clients_can_be_shared_across_threads() {
        assert_send_sync::<UreqTransport>();
        assert_send_sync::<ZillowClient>();
        assert_send_sync::<Zillow>();
    }

    #[test]
    fn from_config_builds_an_agent() {
        let config = ClientConfig::new("X1-abc").with_timeout(Duration::from_secs(5));
        let transport = UreqTransport::from_config(&config);
        assert!(format!("{transport:?}").starts_with("UreqTransport"));
    }
}
