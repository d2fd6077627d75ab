//! Command implementations

pub mod reconcile;
pub mod start;
pub mod status;
pub mod stop;
pub mod version;
