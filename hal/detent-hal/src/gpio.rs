//! Digital output abstractions
//!
//! The relay logic addresses outputs by [`PinId`] and hands levels to an
//! [`OutputSink`]. A sink can front a whole bank of pins (see
//! `detent-hal-rp2040`) or a single `embedded-hal` pin via [`SinglePin`].

use embedded_hal::digital::{OutputPin, PinState};

/// Opaque identifier for a physical digital output
///
/// On the RP2040 this is the GPIO number (0-29).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl PinId {
    /// Create a new pin identifier
    pub const fn new(pin: u8) -> Self {
        Self(pin)
    }

    /// Raw pin number
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(pin: u8) -> Self {
        Self(pin)
    }
}

/// Destination for digital output levels
///
/// Writes are synchronous and have no error channel: a sink that can fail
/// must deal with the failure itself.
pub trait OutputSink {
    /// Drive output `pin` high (`true`) or low (`false`)
    fn write(&mut self, pin: PinId, high: bool);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, pin: PinId, high: bool) {
        (**self).write(pin, high)
    }
}

/// Sink backed by one `embedded-hal` output pin
///
/// Writes addressed to any other [`PinId`] are ignored. Pin errors are
/// discarded since [`OutputSink`] has no way to report them.
pub struct SinglePin<P> {
    id: PinId,
    pin: P,
}

impl<P: OutputPin> SinglePin<P> {
    /// Wrap `pin`, answering to writes for `id`
    pub fn new(id: PinId, pin: P) -> Self {
        Self { id, pin }
    }

    /// The identifier this sink answers to
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Consume the sink and return the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> OutputSink for SinglePin<P> {
    fn write(&mut self, pin: PinId, high: bool) {
        if pin != self.id {
            return;
        }
        let _ = self.pin.set_state(PinState::from(high));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                writes: 0,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_single_pin_drives_matching_id() {
        let mut sink = SinglePin::new(PinId(4), MockPin::new());

        sink.write(PinId(4), true);
        assert!(sink.pin().high);

        sink.write(PinId(4), false);
        assert!(!sink.pin().high);
        assert_eq!(sink.pin().writes, 2);
    }

    #[test]
    fn test_single_pin_ignores_other_ids() {
        let mut sink = SinglePin::new(PinId(4), MockPin::new());

        sink.write(PinId(5), true);
        assert!(!sink.pin().high);
        assert_eq!(sink.into_inner().writes, 0);
    }

    #[test]
    fn test_sink_by_mut_reference() {
        let mut sink = SinglePin::new(PinId::new(1), MockPin::new());

        fn drive<S: OutputSink>(mut s: S) {
            s.write(PinId::from(1), true);
        }

        drive(&mut sink);
        assert!(sink.pin().high);
        assert_eq!(sink.id().number(), 1);
    }
}
