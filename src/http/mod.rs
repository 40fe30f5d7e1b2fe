//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, gating, forwarding)
//!     → response.rs (CORS / JSON error / pass-through builders)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
