//! Debounced relay output
//!
//! Wraps one digital output with a logical on/off state and a
//! [`DebounceGate`]. Every change request reads the clock afresh and is
//! either applied immediately or dropped. Nothing is queued for later.
//!
//! # Usage
//!
//! ```ignore
//! let mut relay = DebouncedOutput::new(PinId(15), clock, sink);
//!
//! // In a button handler:
//! if relay.toggle_state() {
//!     info!("relay on");
//! }
//! ```

use detent_hal::{Clock, Millis, OutputSink, PinId};

use crate::config::RelayConfig;
use crate::debounce::{DebounceGate, DEFAULT_DEBOUNCE_MS};
use crate::state::RelayState;

/// Relay output with software debounce
///
/// The logical state always matches the level last written to the sink:
/// a rejected change leaves both untouched.
///
/// Mutation takes `&mut self`, so concurrent use has to be serialized by the
/// owner (e.g. a mutex or a single owning task).
pub struct DebouncedOutput<C, S> {
    pin: PinId,
    clock: C,
    sink: S,
    gate: DebounceGate,
    /// Current logical state (true = on)
    on: bool,
    /// Clock reading at the last accepted change
    last_change_ms: Millis,
}

impl<C: Clock, S: OutputSink> DebouncedOutput<C, S> {
    /// Create a relay output with the default 1000 ms debounce period
    ///
    /// The output is driven low straight away so the pin never floats in an
    /// undefined state.
    pub fn new(pin: PinId, clock: C, sink: S) -> Self {
        Self::with_period(pin, DEFAULT_DEBOUNCE_MS, clock, sink)
    }

    /// Create a relay output with an explicit debounce period
    ///
    /// # Arguments
    /// - `pin`: Output the relay drives
    /// - `period_ms`: Minimum time between accepted changes (fixed for the
    ///   lifetime of the output)
    /// - `clock`: Wrapping millisecond time source
    /// - `sink`: Destination for output levels
    pub fn with_period(pin: PinId, period_ms: Millis, clock: C, sink: S) -> Self {
        let mut output = Self {
            pin,
            clock,
            sink,
            gate: DebounceGate::new(period_ms),
            on: false,
            last_change_ms: 0,
        };
        // Initial write bypasses the gate
        let now = output.clock.now_ms();
        output.commit(false, now);
        output
    }

    /// Create a relay output from its configuration
    pub fn from_config(config: &RelayConfig, clock: C, sink: S) -> Self {
        Self::with_period(config.pin.id(), config.debounce_ms, clock, sink)
    }

    /// Get the current logical state
    pub fn get_state(&self) -> bool {
        self.on
    }

    /// Get the current state as a [`RelayState`]
    pub fn state(&self) -> RelayState {
        RelayState::from(self.on)
    }

    /// Request a specific state
    ///
    /// Returns the state after the request. Requesting the current state is
    /// a no-op; a change inside the debounce window is dropped and the old
    /// state is returned.
    pub fn set_state(&mut self, on: bool) -> bool {
        if on != self.on {
            self.apply(on);
        }
        self.on
    }

    /// Request the opposite of the current state
    ///
    /// Returns the state after the request, subject to the same debounce
    /// rules as [`set_state`](Self::set_state).
    pub fn toggle_state(&mut self) -> bool {
        self.apply(!self.on);
        self.on
    }

    /// Output this relay drives
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Debounce period (ms)
    pub fn debounce_period_ms(&self) -> Millis {
        self.gate.period_ms()
    }

    /// Clock reading at the last accepted change
    pub fn last_change_ms(&self) -> Millis {
        self.last_change_ms
    }

    /// Get access to the underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get access to the underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the output and return its clock and sink
    ///
    /// The pin keeps whatever level it was last driven to.
    pub fn release(self) -> (C, S) {
        (self.clock, self.sink)
    }

    fn apply(&mut self, on: bool) {
        let now = self.clock.now_ms();
        if self.gate.can_apply(self.last_change_ms, now) {
            self.commit(on, now);
        }
    }

    fn commit(&mut self, on: bool, now: Millis) {
        self.on = on;
        self.last_change_ms = now;
        self.sink.write(self.pin, on);
    }
}
