//! Application services — use-case orchestration.

pub mod view_synchronizer;
