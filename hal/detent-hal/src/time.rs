//! Time source abstraction
//!
//! The relay logic only ever needs "what time is it now" in milliseconds.
//! The counter is 32 bits wide and wraps to zero after `u32::MAX`
//! (about 49.7 days), the same as a free-running millisecond tick.

/// Milliseconds in the wrapping 32-bit time domain
pub type Millis = u32;

/// Monotonic millisecond clock that wraps at `Millis::MAX`
///
/// Implementations must be infallible and side-effect free: reading the
/// clock never blocks and never changes any observable state.
pub trait Clock {
    /// Current time in milliseconds since an implementation-defined epoch
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(Millis);

    impl Clock for FixedClock {
        fn now_ms(&self) -> Millis {
            self.0
        }
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = FixedClock(1234);

        fn read<C: Clock>(c: C) -> Millis {
            c.now_ms()
        }

        assert_eq!(read(&clock), 1234);
        assert_eq!(read(&&clock), 1234);
    }
}
