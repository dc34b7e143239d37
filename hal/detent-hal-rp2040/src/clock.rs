//! Millisecond clock backed by the embassy time driver

use detent_hal::{Clock, Millis};
use embassy_time::Instant;

/// Uptime clock in milliseconds
///
/// The 64-bit embassy uptime is truncated to 32 bits, so the reading wraps
/// to zero every 2^32 ms (~49.7 days), like a classic free-running tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    /// Create a new clock
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> Millis {
        Instant::now().as_millis() as Millis
    }
}
