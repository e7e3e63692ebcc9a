//! Derived values — pure functions from raw snapshot fields to display values.

pub mod civ;
pub mod endpoint;
pub mod latch;
pub mod status;
pub mod uptime;
