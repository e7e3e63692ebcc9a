//! # tunerdash-app
//!
//! Application layer — the view synchronizer and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ViewTarget` — resolve a node key to a page node, or nothing
//!   - `VisualNode` — write text, classes, visibility, color, input state
//!   - `Clock` — wall-clock time for the footer note
//! - Define the **driving use-case**:
//!   - `ViewSynchronizer` — apply one snapshot to every tracked node
//! - Provide in-process infrastructure that doesn't need IO (`SystemClock`)
//!
//! ## Dependency rule
//! Depends on `tunerdash-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
