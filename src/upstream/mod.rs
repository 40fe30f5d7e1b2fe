//! Upstream forwarding subsystem.
//!
//! Builds the outbound target URL and owns the forwarding contract:
//! one POST per accepted submission, raw body verbatim, no retries.

pub mod forward;

pub use forward::{forward_target, FORWARD_CONTENT_TYPE};
