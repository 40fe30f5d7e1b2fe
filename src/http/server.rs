//! HTTP server setup and the gateway handler.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all gateway handler
//! - Wire up middleware (tracing, request ID)
//! - Answer CORS pre-flight before any other inspection
//! - Gate requests: action allow-list, method, config, shared secret
//! - Forward accepted submissions to the upstream web app
//! - Relay the upstream response verbatim

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, Response, StatusCode},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use url::Url;

use crate::actions::{self, Action, ACTION_PARAM};
use crate::config::GatewayConfig;
use crate::http::response::{json_error, pass_through, preflight};
use crate::observability::metrics;
use crate::security::shared_secret;
use crate::upstream::{forward_target, FORWARD_CONTENT_TYPE};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    /// Upstream URL parsed once at startup; `None` means unconfigured.
    pub upstream: Option<Url>,
    pub client: reqwest::Client,
}

/// HTTP server for the submission gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let upstream = config.upstream_url();
        let state = AppState {
            config: Arc::new(config),
            upstream,
            client: reqwest::Client::new(),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        // The action lives in the query string, so every path funnels
        // into the same handler.
        Router::new()
            .route("/", any(gateway_handler))
            .route("/{*path}", any(gateway_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main gateway handler. Records a request metric around the gating
/// and forwarding logic.
async fn gateway_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().clone();

    let response = handle(state, request).await;

    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}

/// Gating checks and forwarding, evaluated in fixed precedence order.
/// Every branch is terminal for the request; there are no retries.
async fn handle(state: AppState, request: Request<Body>) -> Response<Body> {
    // CORS pre-flight wins over everything, including URL inspection.
    if request.method() == Method::OPTIONS {
        return preflight();
    }

    let action = query_param(&request, ACTION_PARAM);
    let action = match action.as_deref().and_then(actions::resolve) {
        Some(action) => action,
        None => {
            // Allow-list miss: unsupported and missing actions both
            // read as "no such route", not "bad request".
            tracing::debug!(action = action.as_deref().unwrap_or(""), "Unknown action");
            return json_error(StatusCode::NOT_FOUND, "Not found");
        }
    };

    if request.method() != Method::POST {
        return json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let upstream = match state.upstream.as_ref() {
        Some(upstream) => upstream,
        None => {
            tracing::error!("Upstream URL not configured");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Missing GAS_URL secret");
        }
    };

    if let Some(expected) = state.config.security.worker_key.as_deref() {
        if !shared_secret::key_matches(request.headers(), expected) {
            tracing::warn!("Shared-secret mismatch");
            return json_error(StatusCode::FORBIDDEN, "Forbidden");
        }
    }

    match action {
        Action::SubmitPublic => submit_public(&state, upstream, action, request).await,
    }
}

/// Forward the raw inbound body to the upstream web app and relay its
/// response.
async fn submit_public(
    state: &AppState,
    upstream: &Url,
    action: Action,
    request: Request<Body>,
) -> Response<Body> {
    // The body is forwarded as-is: no parsing, no size limit, no
    // UTF-8 requirement at this layer.
    let body = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read request body");
            return json_error(StatusCode::BAD_REQUEST, "Bad request");
        }
    };

    let target = forward_target(upstream, action);
    tracing::debug!(target = %target, bytes = body.len(), "Forwarding submission");

    let result = state
        .client
        .post(target)
        .header(header::CONTENT_TYPE, FORWARD_CONTENT_TYPE)
        .body(body)
        .send()
        .await;

    let upstream_res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(error = %e, "Upstream request failed");
            metrics::record_upstream(0);
            return json_error(StatusCode::BAD_GATEWAY, "Bad gateway");
        }
    };

    let status = upstream_res.status();
    let content_type = upstream_res.headers().get(header::CONTENT_TYPE).cloned();
    metrics::record_upstream(status.as_u16());

    match upstream_res.bytes().await {
        Ok(body) => pass_through(status, content_type, body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read upstream body");
            json_error(StatusCode::BAD_GATEWAY, "Bad gateway")
        }
    }
}

/// Extract a single query parameter from the request URI.
fn query_param(request: &Request<Body>, name: &str) -> Option<String> {
    let query = request.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
