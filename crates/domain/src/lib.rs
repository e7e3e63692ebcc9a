//! # tunerdash-domain
//!
//! Pure domain model for the tuner controller dashboard.
//!
//! ## Responsibilities
//! - Decode telemetry frames into a lenient [`snapshot::TelemetrySnapshot`]
//! - Define the **node catalog**: the stable keys shared with the page markup
//! - Compute **derived values**: uptime text, CI-V address, connection status,
//!   remote-link state, endpoint text, latch states
//! - Decide **visibility** of model-specific controls
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never touches the page. Writing to nodes is expressed as traits in the
//! `app` crate (ports).

pub mod catalog;
pub mod derive;
pub mod error;
pub mod scalar;
pub mod snapshot;
pub mod time;
pub mod view;
pub mod visibility;
