//! API reachability probe.

use reqwest::Method;
use store::HealthConfig;
use tracing::debug;

use crate::gateway::Gateway;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    Online,
    #[default]
    Offline,
}

impl HealthStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, HealthStatus::Online)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Online => "API connected",
            HealthStatus::Offline => "API disconnected",
        }
    }
}

/// `GET /health` with the short probe timeout. Any failure counts as offline.
pub async fn check(gateway: &Gateway, config: &HealthConfig) -> HealthStatus {
    let mut request = gateway.request(Method::GET, "/health");
    request.timeout = Some(config.timeout());
    match gateway.execute(request).await {
        Ok(_) => HealthStatus::Online,
        Err(e) => {
            debug!("Health check failed: {}", e);
            HealthStatus::Offline
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::ApiError;
    use crate::testing::RecordingTransport;

    #[tokio::test]
    async fn probe_uses_short_timeout() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"status":"UP"}"#);
        let gw = transport.gateway();

        let status = check(&gw, &HealthConfig::default()).await;

        assert!(status.is_online());
        assert_eq!(
            transport.last_request().unwrap().timeout,
            Some(Duration::from_millis(3000))
        );
    }

    #[tokio::test]
    async fn any_failure_is_offline() {
        let transport = RecordingTransport::new();
        transport.fail(ApiError::Timeout(Duration::from_secs(3)));
        transport.respond(503, "");
        let gw = transport.gateway();
        let config = HealthConfig::default();

        assert_eq!(check(&gw, &config).await, HealthStatus::Offline);
        assert_eq!(check(&gw, &config).await, HealthStatus::Offline);
    }
}
