//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway handler produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request / upstream counters, latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log events (tower-http layer)
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;
