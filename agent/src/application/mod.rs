//! Application layer — use-cases over capability ports.

pub mod ports;
pub mod services;
