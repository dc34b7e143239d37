//! RP2040-specific HAL for the relay firmware
//!
//! This crate provides RP2040 implementations of the shared `detent-hal`
//! traits:
//!
//! - [`clock::EmbassyClock`] - wrapping millisecond clock (implements `detent_hal::Clock`)
//! - [`gpio::GpioOutput`] - relay output with polarity (implements `detent_hal::OutputSink`)
//! - [`pins::PinBank`] - dynamic pin allocation for config-driven setup

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pins;

pub use clock::EmbassyClock;
pub use gpio::{input_from_config, GpioOutput};
pub use pins::{PinBank, PinError};

// Re-export shared traits from detent-hal for convenience
pub use detent_hal::{Clock, OutputSink, PinId};
