//! Detent Hardware Abstraction Layer
//!
//! This crate defines the two collaborator seams the relay logic depends on.
//! Chip-specific HALs implement them; tests implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (detent-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-core (debounced output logic)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  detent-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`time::Clock`] - Wrapping millisecond time source
//! - [`gpio::OutputSink`] - Writes a level to an output addressed by [`gpio::PinId`]
//! - [`gpio::SinglePin`] - Sink over a single `embedded-hal` output pin

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{OutputSink, PinId, SinglePin};
pub use time::{Clock, Millis};
