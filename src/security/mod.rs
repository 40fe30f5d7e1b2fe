//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → shared_secret.rs (x-worker-key check, when configured)
//!     → Pass to forwarding
//! ```
//!
//! # Design Decisions
//! - Fail-open by design: no configured key means no check (the
//!   operator opts in to enforcement by setting one)
//! - The key is a coarse anti-abuse gate, not authentication

pub mod shared_secret;

pub use shared_secret::{key_matches, WORKER_KEY_HEADER};
