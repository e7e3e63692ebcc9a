//! System clock backed by the host's local time.

use tunerdash_domain::time::{Timestamp, now};

use crate::ports::Clock;

/// [`Clock`] reading the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        now()
    }
}
