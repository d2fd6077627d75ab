//! Infrastructure layer — production implementations of the ports.

pub mod config;
pub mod paths;
pub mod platform;
pub mod process;
