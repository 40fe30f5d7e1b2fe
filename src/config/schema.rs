//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream web app the gateway forwards submissions to.
    pub upstream: UpstreamConfig,

    /// Shared-secret settings.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    /// Parsed upstream URL, if one is configured and well-formed.
    ///
    /// Validation rejects malformed URLs at load time; a `None` here
    /// means forwarding is unconfigured and requests answer 500.
    pub fn upstream_url(&self) -> Option<Url> {
        self.upstream.url.as_deref().and_then(|u| Url::parse(u).ok())
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream target configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Web app URL submissions are forwarded to.
    ///
    /// Absent means the gateway is not yet configured: forwarded
    /// requests answer 500 rather than being dropped silently.
    /// Overridable via the `GAS_URL` environment variable.
    pub url: Option<String>,
}

/// Shared-secret configuration.
///
/// When a key is set, callers must present it in the `x-worker-key`
/// header. When unset the check is skipped entirely (fail-open,
/// operator opt-in enforcement).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// Shared secret callers must echo back.
    /// Overridable via the `WORKER_KEY` environment variable.
    pub worker_key: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
