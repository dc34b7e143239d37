//! Simple TOML parser for relay configuration
//!
//! This is a minimal line-oriented parser that handles only the subset
//! needed for relay configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer)
//! - `[relay.NAME]` and `[button.NAME]` section headers
//! - Root-level `debounce_ms` as the default for every relay
//! - Comments (# ...), including trailing comments
//! - Pin strings: `"gpio15"`, `"!gpio15"` (active-low), `"^gpio14"` (pull-up)
//!
//! Example:
//!
//! ```toml
//! debounce_ms = 1000
//!
//! [relay.pump]
//! pin = "gpio15"
//!
//! [relay.lamp]
//! pin = "!gpio16"
//! debounce_ms = 250
//!
//! [button.front]
//! pin = "^gpio14"
//! relay = "pump"
//! ```

use heapless::String;

use detent_hal::Millis;

use super::types::{ButtonConfig, DetentConfig, PinConfig, RelayConfig, GPIO_COUNT, MAX_LABEL_LEN};
use crate::debounce::DEFAULT_DEBOUNCE_MS;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Line is neither a section header nor a key/value pair
    InvalidLine,
    /// Invalid value type
    InvalidValue,
    /// Key not valid in the current section
    UnknownKey,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
    /// Invalid pin string or pin number out of range
    InvalidPin,
    /// Relay or button section without a `pin` key
    MissingPin,
    /// Button section without a `relay` key
    MissingRelay,
    /// Button refers to a relay that is not defined
    UnknownRelay,
    /// Two sections of the same kind share a name
    DuplicateName,
    /// Two relays or buttons claim the same pin
    DuplicatePin,
}

/// Section being filled in
enum Section {
    Root,
    Relay(RelayDraft),
    Button(ButtonDraft),
}

struct RelayDraft {
    name: String<MAX_LABEL_LEN>,
    pin: Option<PinConfig>,
    debounce_ms: Option<Millis>,
}

struct ButtonDraft {
    name: String<MAX_LABEL_LEN>,
    pin: Option<PinConfig>,
    relay: Option<String<MAX_LABEL_LEN>>,
}

/// Parse relay configuration text into a [`DetentConfig`]
///
/// The result is validated: every button refers to a defined relay and no
/// pin is claimed twice.
pub fn parse_config(input: &str) -> Result<DetentConfig, ParseError> {
    let mut config = DetentConfig::new();
    let mut section = Section::Root;
    let mut default_debounce_ms = DEFAULT_DEBOUNCE_MS;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            let next = parse_section_header(&line[1..line.len() - 1])?;
            let previous = core::mem::replace(&mut section, next);
            save_section(previous, &mut config, default_debounce_ms)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;

        match &mut section {
            Section::Root => match key {
                "debounce_ms" => default_debounce_ms = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            },
            Section::Relay(relay) => match key {
                "pin" => relay.pin = Some(parse_pin(value)?),
                "debounce_ms" => relay.debounce_ms = Some(parse_int(value)?),
                _ => return Err(ParseError::UnknownKey),
            },
            Section::Button(button) => match key {
                "pin" => button.pin = Some(parse_pin(value)?),
                "relay" => button.relay = Some(parse_label(value)?),
                _ => return Err(ParseError::UnknownKey),
            },
        }
    }

    // Save final section
    save_section(section, &mut config, default_debounce_ms)?;

    validate(&config)?;
    Ok(config)
}

/// Parse a section header (without brackets)
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    let (kind, name) = header
        .trim()
        .split_once('.')
        .ok_or(ParseError::InvalidSection)?;
    let name = name.trim();

    if name.is_empty() || name.contains('.') {
        return Err(ParseError::InvalidSection);
    }
    let name = String::try_from(name).map_err(|_| ParseError::InvalidSection)?;

    match kind.trim() {
        "relay" => Ok(Section::Relay(RelayDraft {
            name,
            pin: None,
            debounce_ms: None,
        })),
        "button" => Ok(Section::Button(ButtonDraft {
            name,
            pin: None,
            relay: None,
        })),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Move a finished section into the config
fn save_section(
    section: Section,
    config: &mut DetentConfig,
    default_debounce_ms: Millis,
) -> Result<(), ParseError> {
    match section {
        Section::Root => Ok(()),
        Section::Relay(draft) => {
            if config.find_relay(&draft.name).is_some() {
                return Err(ParseError::DuplicateName);
            }
            let relay = RelayConfig {
                name: draft.name,
                pin: draft.pin.ok_or(ParseError::MissingPin)?,
                debounce_ms: draft.debounce_ms.unwrap_or(default_debounce_ms),
            };
            config
                .relays
                .push(relay)
                .map_err(|_| ParseError::TooManyItems)
        }
        Section::Button(draft) => {
            if config.buttons.iter().any(|b| b.name == draft.name) {
                return Err(ParseError::DuplicateName);
            }
            let button = ButtonConfig {
                name: draft.name,
                pin: draft.pin.ok_or(ParseError::MissingPin)?,
                relay: draft.relay.ok_or(ParseError::MissingRelay)?,
            };
            config
                .buttons
                .push(button)
                .map_err(|_| ParseError::TooManyItems)
        }
    }
}

/// Cross-section checks that need the whole file
fn validate(config: &DetentConfig) -> Result<(), ParseError> {
    for button in &config.buttons {
        if config.find_relay(&button.relay).is_none() {
            return Err(ParseError::UnknownRelay);
        }
    }

    for (i, pin) in config.pins().enumerate() {
        if config.pins().skip(i + 1).any(|other| other.pin == pin.pin) {
            return Err(ParseError::DuplicatePin);
        }
    }

    Ok(())
}

/// Parse a key = value line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse a string value into a fixed-capacity label
fn parse_label(value: &str) -> Result<String<MAX_LABEL_LEN>, ParseError> {
    let label = parse_string(value);
    if label.is_empty() {
        return Err(ParseError::InvalidValue);
    }
    String::try_from(label).map_err(|_| ParseError::InvalidValue)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut pin = PinConfig::default();

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            pin.inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pin.pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    // Parse "gpioNN"
    let number = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPin);
    }
    pin.pin = number.parse().map_err(|_| ParseError::InvalidPin)?;

    if pin.pin >= GPIO_COUNT {
        return Err(ParseError::InvalidPin);
    }

    Ok(pin)
}
