//! Controller management: install, start/stop, introspection, side config.

pub mod install;
pub mod lifecycle;
pub mod probe;
pub mod side_config;
