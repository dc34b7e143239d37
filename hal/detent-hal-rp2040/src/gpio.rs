//! GPIO setup from relay configuration

use embassy_rp::gpio::{Input, Level, Output, Pull};

use detent_core::config::PinConfig;
use detent_hal::{OutputSink, PinId};

use crate::pins::{PinBank, PinError};

/// Relay control output
///
/// Drives one GPIO pin, translating the logical level for active-low
/// (inverted) relays and SSRs. Writes addressed to another pin are dropped.
pub struct GpioOutput {
    id: PinId,
    output: Output<'static>,
    /// If true, logical high = pin LOW
    inverted: bool,
}

impl GpioOutput {
    /// Take the configured pin from the bank and set it up as an output
    ///
    /// The pin starts at its logical low level.
    pub fn from_config(bank: &mut PinBank, config: &PinConfig) -> Result<Self, PinError> {
        let pin = bank.take(config.pin)?;
        let output = Output::new(pin, physical_level(false, config.inverted));
        Ok(Self {
            id: config.id(),
            output,
            inverted: config.inverted,
        })
    }
}

impl OutputSink for GpioOutput {
    fn write(&mut self, pin: PinId, high: bool) {
        if pin != self.id {
            #[cfg(feature = "defmt")]
            defmt::warn!("Write for {} dropped by output {}", pin, self.id);
            return;
        }
        self.output.set_level(physical_level(high, self.inverted));
    }
}

/// Take the configured pin from the bank and set it up as an input
///
/// Enables the internal pull-up when the config asks for one.
pub fn input_from_config(
    bank: &mut PinBank,
    config: &PinConfig,
) -> Result<Input<'static>, PinError> {
    let pin = bank.take(config.pin)?;
    let pull = if config.pull_up { Pull::Up } else { Pull::None };
    Ok(Input::new(pin, pull))
}

fn physical_level(high: bool, inverted: bool) -> Level {
    // Normal: high=true, inverted=false → High
    // Inverted: high=true, inverted=true → Low
    Level::from(high != inverted)
}
