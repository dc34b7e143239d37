//! Configuration loading
//!
//! Parses the relay configuration compiled into the firmware image.
//! Falls back to a single relay on GPIO15 if the embedded config is invalid.

use defmt::*;
use heapless::String;

use detent_core::config::{parse_config, DetentConfig, PinConfig, RelayConfig};

/// Embedded relay configuration (compiled into firmware)
/// Edit relay.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../relay.toml");

/// Control pin for the fallback relay
const FALLBACK_RELAY_PIN: u8 = 15;

/// Load the embedded configuration
pub fn load_config() -> DetentConfig {
    info!("Loading configuration ({} bytes)...", EMBEDDED_CONFIG.len());

    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            // build.rs validates the file, so this means the two disagree
            error!("Config parse error: {:?}, using fallback", e);
            fallback_config()
        }
    }
}

/// Single relay with the default debounce period and no buttons
fn fallback_config() -> DetentConfig {
    let mut config = DetentConfig::new();
    let relay = RelayConfig {
        name: String::try_from("main").unwrap_or_default(),
        pin: PinConfig::new(FALLBACK_RELAY_PIN),
        ..RelayConfig::default()
    };
    // An empty list always has room for one relay
    let _ = config.relays.push(relay);
    config
}

fn log_config_summary(config: &DetentConfig) {
    info!(
        "Config: {} relays, {} buttons",
        config.relays.len(),
        config.buttons.len()
    );
    for relay in &config.relays {
        debug!(
            "  relay '{}': gpio{}{} debounce={}ms",
            relay.name.as_str(),
            relay.pin.pin,
            if relay.pin.inverted { " (active-low)" } else { "" },
            relay.debounce_ms
        );
    }
    for button in &config.buttons {
        debug!(
            "  button '{}': gpio{} -> '{}'",
            button.name.as_str(),
            button.pin.pin,
            button.relay.as_str()
        );
    }
}
