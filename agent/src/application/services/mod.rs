//! Application services — the use-cases of the supervision core.

pub mod controller;
pub mod legacy;
pub mod reconcile;
