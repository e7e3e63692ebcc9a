//! Port definitions — traits that adapters implement.
//!
//! The page owns its nodes. The core only resolves them by key and writes
//! display attributes; it never creates, removes or diffs them.

pub mod clock;
pub mod view;

pub use clock::Clock;
pub use view::{ViewTarget, VisualNode};
