//! Relay configuration types
//!
//! These types describe which pins drive relays, how long each relay is
//! debounced, and which push buttons trigger them.

use heapless::{String, Vec};

use detent_hal::{Millis, PinId};

use crate::debounce::DEFAULT_DEBOUNCE_MS;

/// Maximum length of a relay or button name
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum relays per config
pub const MAX_RELAYS: usize = 8;

/// Maximum buttons per config
pub const MAX_BUTTONS: usize = 8;

/// Number of user GPIO pins (RP2040: GPIO0-GPIO29)
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Identifier the output sink addresses this pin by
    pub const fn id(&self) -> PinId {
        PinId(self.pin)
    }
}

/// Debounced relay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// Relay name (e.g., "pump", "lamp")
    pub name: String<MAX_LABEL_LEN>,
    /// Control pin
    pub pin: PinConfig,
    /// Minimum time between accepted state changes (ms)
    pub debounce_ms: Millis,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            pin: PinConfig::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl RelayConfig {
    /// Unnamed relay on `pin` with the default debounce period
    pub fn on_pin(pin: u8) -> Self {
        Self {
            pin: PinConfig::new(pin),
            ..Self::default()
        }
    }
}

/// Push button that toggles a relay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Button name
    pub name: String<MAX_LABEL_LEN>,
    /// Input pin (pressed = low unless inverted)
    pub pin: PinConfig,
    /// Name of the relay this button toggles
    pub relay: String<MAX_LABEL_LEN>,
}

/// Complete relay board configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetentConfig {
    /// Configured relays
    pub relays: Vec<RelayConfig, MAX_RELAYS>,
    /// Configured buttons
    pub buttons: Vec<ButtonConfig, MAX_BUTTONS>,
}

impl DetentConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a relay by name
    pub fn find_relay(&self, name: &str) -> Option<&RelayConfig> {
        self.relays.iter().find(|r| r.name.as_str() == name)
    }

    /// Iterate over every pin the configuration claims
    pub fn pins(&self) -> impl Iterator<Item = &PinConfig> {
        self.relays
            .iter()
            .map(|r| &r.pin)
            .chain(self.buttons.iter().map(|b| &b.pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay(name: &str, pin: u8) -> RelayConfig {
        RelayConfig {
            name: String::try_from(name).unwrap(),
            ..RelayConfig::on_pin(pin)
        }
    }

    #[test]
    fn test_relay_defaults() {
        let relay = RelayConfig::default();
        assert_eq!(relay.debounce_ms, 1000);
        assert!(!relay.pin.inverted);
    }

    #[test]
    fn test_pin_id() {
        assert_eq!(PinConfig::new(12).id(), PinId(12));
        assert_eq!(PinConfig::inverted(3).id(), PinId(3));
    }

    #[test]
    fn test_find_relay() {
        let mut config = DetentConfig::new();
        config.relays.push(relay("pump", 2)).unwrap();
        config.relays.push(relay("lamp", 3)).unwrap();

        assert_eq!(config.find_relay("lamp").map(|r| r.pin.pin), Some(3));
        assert_eq!(config.find_relay("pump").map(|r| r.pin.pin), Some(2));
        assert!(config.find_relay("fan").is_none());
    }

    #[test]
    fn test_pins_cover_relays_and_buttons() {
        let mut config = DetentConfig::new();
        config.relays.push(relay("pump", 2)).unwrap();
        config
            .buttons
            .push(ButtonConfig {
                pin: PinConfig::new(9),
                relay: String::try_from("pump").unwrap(),
                ..ButtonConfig::default()
            })
            .unwrap();

        let mut pins = config.pins().map(|p| p.pin);
        assert_eq!(pins.next(), Some(2));
        assert_eq!(pins.next(), Some(9));
        assert_eq!(pins.next(), None);
    }
}
