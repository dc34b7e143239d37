//! Relay control task
//!
//! Owns every configured relay and applies commands from the button tasks.
//! Debounce decisions are made by `DebouncedOutput`; this task only reports
//! the outcome.

use defmt::*;
use heapless::Vec;

use detent_core::config::MAX_RELAYS;
use detent_core::DebouncedOutput;
use detent_hal_rp2040::{EmbassyClock, GpioOutput};

use crate::channels::{RelayAction, RELAY_CMD};

/// Relay output as wired on this board
pub type Relay = DebouncedOutput<EmbassyClock, GpioOutput>;

/// Named relay owned by the relay task
pub struct RelaySlot {
    /// Relay name from config
    pub name: &'static str,
    pub relay: Relay,
}

/// Relay control task
///
/// Waits for relay commands and applies them. A request that does not
/// change the state is logged at debug level: either the relay was already
/// there or the change fell inside the debounce window.
#[embassy_executor::task]
pub async fn relay_task(mut relays: Vec<RelaySlot, MAX_RELAYS>) {
    info!("Relay task started");

    loop {
        let cmd = RELAY_CMD.receive().await;

        let Some(slot) = relays.get_mut(cmd.relay as usize) else {
            warn!("Command for unknown relay {}", cmd.relay);
            continue;
        };

        let before = slot.relay.get_state();
        let after = match cmd.action {
            RelayAction::Toggle => slot.relay.toggle_state(),
            RelayAction::Set(on) => slot.relay.set_state(on),
        };

        if after != before {
            info!("Relay '{}' {}", slot.name, slot.relay.state());
        } else if cmd.action == RelayAction::Set(before) {
            trace!("Relay '{}' already {}", slot.name, if before { "on" } else { "off" });
        } else {
            debug!(
                "Relay '{}' change debounced (last change at {}ms)",
                slot.name,
                slot.relay.last_change_ms()
            );
        }
    }
}
