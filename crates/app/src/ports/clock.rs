//! Clock port — wall-clock time for stamping the footer.

use tunerdash_domain::time::Timestamp;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}
