//! Build script for detent-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates relay.toml at compile time

use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate relay.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=relay.toml");

    let config_path = Path::new("relay.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read relay.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in relay.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let errors = validate_relays(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid relay configuration in relay.toml                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=relay.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check relay and button sections
fn validate_relays(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let relays = match config.get("relay") {
        Some(toml::Value::Table(t)) => t.clone(),
        _ => {
            errors.push("Missing [relay.*] section - at least one relay is required".into());
            return errors;
        }
    };

    let mut pins = HashSet::new();

    for (name, relay) in &relays {
        match relay.get("pin") {
            Some(toml::Value::String(pin)) => {
                check_pin(&format!("relay.{}", name), pin, &mut pins, &mut errors)
            }
            _ => errors.push(format!("[relay.{}] missing 'pin'", name)),
        }
        if let Some(value) = relay.get("debounce_ms") {
            match value.as_integer() {
                Some(ms) if (0..=u32::MAX as i64).contains(&ms) => {}
                _ => errors.push(format!(
                    "[relay.{}] debounce_ms must be 0-{}",
                    name,
                    u32::MAX
                )),
            }
        }
    }

    if let Some(toml::Value::Table(buttons)) = config.get("button") {
        for (name, button) in buttons {
            match button.get("pin") {
                Some(toml::Value::String(pin)) => {
                    check_pin(&format!("button.{}", name), pin, &mut pins, &mut errors)
                }
                _ => errors.push(format!("[button.{}] missing 'pin'", name)),
            }
            match button.get("relay") {
                Some(toml::Value::String(relay)) if relays.contains_key(relay) => {}
                Some(toml::Value::String(relay)) => {
                    errors.push(format!("[button.{}] unknown relay '{}'", name, relay))
                }
                _ => errors.push(format!("[button.{}] missing 'relay'", name)),
            }
        }
    }

    errors
}

/// Check a pin string like "gpio15", "!gpio15", "^gpio14"
fn check_pin(section: &str, pin: &str, seen: &mut HashSet<u8>, errors: &mut Vec<String>) {
    let number = pin
        .trim_start_matches(['!', '^'])
        .strip_prefix("gpio")
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|&n| n < 30);

    match number {
        Some(n) if !seen.insert(n) => {
            errors.push(format!("[{}] gpio{} already in use", section, n))
        }
        Some(_) => {}
        None => errors.push(format!("[{}] invalid pin '{}'", section, pin)),
    }
}
