//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Channel errors ────────────────────────────────────────────────────────────

/// Why a configured channel value cannot be used as an IP-form address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel value '{0}' is not of the form host:port")]
    Malformed(String),

    #[error("channel port {0} is outside the accepted range (1000..60000, exclusive)")]
    PortOutOfRange(u16),
}
