//! Channel addresses — the endpoint the controller reaches the agent on.
//!
//! An address is rendered as `<prefix>/<payload>`: either a per-process
//! mailslot stem (`ms/argus_service_4242`) or a TCP endpoint
//! (`ip/localhost:50001`). The formatting here must stay byte-identical
//! between what is written to configuration consumers and what is passed
//! on the controller command line.

use std::fmt;

use crate::domain::error::ChannelError;
use crate::domain::modus::Modus;

// ── Constants ────────────────────────────────────────────────────────────────

/// Configuration sentinel selecting the mailslot transport.
pub const MAILSLOT_SENTINEL: &str = "mailslot";

/// Port used when the modus pins the channel to the internal endpoint.
pub const INTERNAL_EXEC_PORT: u16 = 50001;

/// Exclusive lower bound for an acceptable configured channel port.
pub const CHANNEL_PORT_MIN: u16 = 1000;
/// Exclusive upper bound for an acceptable configured channel port.
pub const CHANNEL_PORT_MAX: u16 = 60000;

const PREFIX_SEPARATOR: char = '/';

// ── Types ────────────────────────────────────────────────────────────────────

/// Transport selector carried as the prefix of every channel address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Mailslot,
    Ip,
}

impl AddressKind {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            AddressKind::Mailslot => "ms",
            AddressKind::Ip => "ip",
        }
    }
}

/// A fully formatted channel address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelAddress {
    kind: AddressKind,
    payload: String,
}

impl ChannelAddress {
    /// Mailslot address owned by this agent invocation.
    #[must_use]
    pub fn mailslot(modus: Modus, pid: u32) -> Self {
        Self {
            kind: AddressKind::Mailslot,
            payload: format!("argus_{modus}_{pid}"),
        }
    }

    /// TCP address on the given host and port.
    #[must_use]
    pub fn ip(host: &str, port: u16) -> Self {
        Self {
            kind: AddressKind::Ip,
            payload: format!("{host}:{port}"),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Port of an IP-form address; `None` for mailslots.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        match self.kind {
            AddressKind::Mailslot => None,
            AddressKind::Ip => self
                .payload
                .rsplit_once(':')
                .and_then(|(_, port)| port.parse().ok()),
        }
    }
}

impl fmt::Display for ChannelAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{PREFIX_SEPARATOR}{}", self.kind.prefix(), self.payload)
    }
}

// ── Parsing and resolution ───────────────────────────────────────────────────

/// Check a configured channel port for plausibility. Bounds are exclusive.
#[must_use]
pub fn port_is_valid(port: u16) -> bool {
    port > CHANNEL_PORT_MIN && port < CHANNEL_PORT_MAX
}

/// Parse a configured `host:port` channel value.
///
/// The value must contain exactly one `:`, a non-empty host, and a port
/// strictly inside the accepted range.
///
/// # Errors
///
/// Returns [`ChannelError::Malformed`] when the shape is wrong and
/// [`ChannelError::PortOutOfRange`] when the port parses but is unusable.
pub fn parse_ip_channel(value: &str) -> Result<(String, u16), ChannelError> {
    let parts: Vec<&str> = value.split(':').collect();
    let [host, port] = parts[..] else {
        return Err(ChannelError::Malformed(value.to_string()));
    };
    if host.is_empty() {
        return Err(ChannelError::Malformed(value.to_string()));
    }
    let port: u16 = port
        .parse()
        .map_err(|_| ChannelError::Malformed(value.to_string()))?;
    if !port_is_valid(port) {
        return Err(ChannelError::PortOutOfRange(port));
    }
    Ok((host.to_string(), port))
}

/// Resolve the effective channel address for this invocation.
///
/// The decision order is fixed: the `mailslot` sentinel wins, then a modus
/// that pins the internal port, then the configured `host:port` value.
/// A value that does not parse degrades to the mailslot form so that a bad
/// configuration can never produce a malformed IP address.
#[must_use]
pub fn effective_channel(configured: &str, modus: Modus, pid: u32) -> ChannelAddress {
    if configured == MAILSLOT_SENTINEL {
        return ChannelAddress::mailslot(modus, pid);
    }
    if modus.uses_internal_port() {
        return ChannelAddress::ip("localhost", INTERNAL_EXEC_PORT);
    }
    match parse_ip_channel(configured) {
        Ok((host, port)) => ChannelAddress::ip(&host, port),
        Err(err) => {
            tracing::warn!(
                channel = configured,
                error = %err,
                "configured agent channel is unusable, falling back to the mailslot"
            );
            ChannelAddress::mailslot(modus, pid)
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
