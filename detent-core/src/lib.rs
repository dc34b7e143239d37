//! Board-agnostic core logic for the relay firmware
//!
//! This crate contains all relay logic that does not depend on specific
//! hardware implementations:
//!
//! - Debounce gate over a wrapping millisecond clock
//! - Debounced relay output (state query, set, toggle)
//! - Relay state type
//! - Configuration types and config-file parser
//!
//! Time and pin access are injected through the `detent-hal` traits, so
//! everything here runs unchanged on the host under test.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod output;
pub mod state;

pub use debounce::{DebounceGate, DEFAULT_DEBOUNCE_MS};
pub use output::DebouncedOutput;
pub use state::RelayState;

pub use detent_hal::{Clock, Millis, OutputSink, PinId};
