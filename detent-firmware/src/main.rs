//! Detent - Debounced Relay Firmware
//!
//! Main firmware binary for RP2040-based relay boards. Relays and the push
//! buttons that toggle them are described in `relay.toml`, which is
//! embedded into the image at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use heapless::Vec;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use detent_core::config::{DetentConfig, MAX_RELAYS};
use detent_core::DebouncedOutput;
use detent_hal_rp2040::{input_from_config, EmbassyClock, GpioOutput, PinBank};

use crate::tasks::{Relay, RelaySlot};

mod channels;
mod config;
mod tasks;

// Configuration must live forever for task references
static DETENT_CONFIG: StaticCell<DetentConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);
    info!("Peripherals initialized");

    let config: &'static DetentConfig = DETENT_CONFIG.init(config::load_config());

    // Relays: each output is driven low as soon as it is constructed
    let mut relays: Vec<RelaySlot, MAX_RELAYS> = Vec::new();
    for relay_config in &config.relays {
        let sink = match GpioOutput::from_config(&mut bank, &relay_config.pin) {
            Ok(sink) => sink,
            Err(e) => {
                error!(
                    "Relay '{}' unavailable on gpio{}: {:?}",
                    relay_config.name.as_str(),
                    relay_config.pin.pin,
                    e
                );
                continue;
            }
        };
        let relay: Relay = DebouncedOutput::from_config(relay_config, EmbassyClock::new(), sink);
        info!(
            "Relay '{}' ready on gpio{} ({}ms debounce)",
            relay_config.name.as_str(),
            relay_config.pin.pin,
            relay.debounce_period_ms()
        );
        // Capacity matches config.relays, so this cannot overflow
        let _ = relays.push(RelaySlot {
            name: relay_config.name.as_str(),
            relay,
        });
    }

    // Buttons refer to relays by name; resolve to slot index
    for button in &config.buttons {
        let Some(index) = relays.iter().position(|r| r.name == button.relay.as_str()) else {
            warn!(
                "Button '{}' skipped: relay '{}' not available",
                button.name.as_str(),
                button.relay.as_str()
            );
            continue;
        };

        match input_from_config(&mut bank, &button.pin) {
            Ok(input) => {
                spawner
                    .spawn(tasks::button_task(input, button, index as u8))
                    .unwrap();
            }
            Err(e) => {
                error!(
                    "Button '{}' unavailable on gpio{}: {:?}",
                    button.name.as_str(),
                    button.pin.pin,
                    e
                );
            }
        }
    }

    info!("{} relays, {} buttons active", relays.len(), config.buttons.len());
    spawner.spawn(tasks::relay_task(relays)).unwrap();
}
