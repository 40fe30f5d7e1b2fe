//! Submission gateway library.
//!
//! A thin edge handler in front of a backend web app: it accepts one
//! public action (`POST ?action=submitPublic`), gates it, forwards the
//! raw body upstream, and relays the upstream response verbatim.

pub mod actions;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
