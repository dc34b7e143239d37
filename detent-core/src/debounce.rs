//! Debounce gate
//!
//! Decides whether a relay may change state, given when it last changed and
//! the current reading of a wrapping 32-bit millisecond clock.
//!
//! # Wraparound
//!
//! The gate never subtracts timestamps. It accepts a change when either:
//!
//! - the clock has wrapped (`now < last`) and `now > period`, or
//! - the clock has not wrapped and `now > last + period`.
//!
//! Both comparisons are strict, so a change exactly at the boundary is
//! rejected. The wrapped branch only looks at time since the wrap epoch, so
//! it is conservative rather than exact: right after a wrap the gate may hold
//! a relay for up to `period` ms longer than strictly necessary. It never
//! opens early while inside the debounce window of a non-wrapping clock.

use detent_hal::Millis;

/// Default debounce period (ms)
pub const DEFAULT_DEBOUNCE_MS: Millis = 1000;

/// Minimum-interval gate over a wrapping millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    period_ms: Millis,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl DebounceGate {
    /// Create a gate with the given debounce period
    pub const fn new(period_ms: Millis) -> Self {
        Self { period_ms }
    }

    /// Debounce period (ms)
    pub const fn period_ms(&self) -> Millis {
        self.period_ms
    }

    /// Check whether a change at `now_ms` is allowed, given the last accepted
    /// change at `last_change_ms`
    pub fn can_apply(&self, last_change_ms: Millis, now_ms: Millis) -> bool {
        let wrapped = now_ms < last_change_ms && now_ms > self.period_ms;

        // A deadline past Millis::MAX cannot be reached before the wrap
        let elapsed = last_change_ms
            .checked_add(self.period_ms)
            .is_some_and(|deadline| now_ms > deadline);

        wrapped || elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period() {
        let gate = DebounceGate::default();
        assert_eq!(gate.period_ms(), 1000);
    }

    #[test]
    fn test_rejects_inside_window() {
        let gate = DebounceGate::new(1000);

        assert!(!gate.can_apply(0, 0));
        assert!(!gate.can_apply(0, 500));
        assert!(!gate.can_apply(1500, 1600));
        assert!(!gate.can_apply(1500, 2499));
    }

    #[test]
    fn test_boundary_is_rejected() {
        let gate = DebounceGate::new(1000);

        assert!(!gate.can_apply(0, 1000));
        assert!(gate.can_apply(0, 1001));
        assert!(!gate.can_apply(1500, 2500));
        assert!(gate.can_apply(1500, 2501));
    }

    #[test]
    fn test_accepts_after_window() {
        let gate = DebounceGate::new(1000);

        assert!(gate.can_apply(0, 1500));
        assert!(gate.can_apply(10_000, 20_000));
    }

    #[test]
    fn test_wrapped_clock_waits_for_period_since_wrap() {
        let gate = DebounceGate::new(1000);
        let last = Millis::MAX - 100;

        // Wrapped, but still within the first period after zero
        assert!(!gate.can_apply(last, 0));
        assert!(!gate.can_apply(last, 1000));

        // Wrapped and past the period
        assert!(gate.can_apply(last, 1001));
    }

    #[test]
    fn test_deadline_past_wrap_never_opens_before_wrap() {
        let gate = DebounceGate::new(1000);
        let last = Millis::MAX - 10;

        assert!(!gate.can_apply(last, Millis::MAX - 5));
        assert!(!gate.can_apply(last, Millis::MAX));
    }

    #[test]
    fn test_zero_period() {
        let gate = DebounceGate::new(0);

        // Strict comparison: same timestamp is still rejected
        assert!(!gate.can_apply(100, 100));
        assert!(gate.can_apply(100, 101));
        // Any wrapped reading above zero is accepted
        assert!(gate.can_apply(100, 1));
        assert!(!gate.can_apply(100, 0));
    }
}
