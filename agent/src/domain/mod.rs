//! Domain layer — pure types and decision logic.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod channel;
pub mod config;
pub mod error;
pub mod layout;
pub mod marker;
pub mod modus;

#[allow(unused_imports)]
pub use channel::{AddressKind, ChannelAddress, effective_channel, parse_ip_channel};
#[allow(unused_imports)]
pub use config::{AgentConfig, ControllerConfig, CrashAction, GlobalConfig, SystemConfig};
#[allow(unused_imports)]
pub use error::ChannelError;
#[allow(unused_imports)]
pub use layout::AgentLayout;
#[allow(unused_imports)]
pub use marker::{MarkerDisposition, MarkerSample, classify};
#[allow(unused_imports)]
pub use modus::Modus;
