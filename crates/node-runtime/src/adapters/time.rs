//! System clock adapter.

use bb_06_lifecycle::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock in milliseconds since the UNIX epoch.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
