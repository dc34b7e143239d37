//! Push button task
//!
//! Watches one button input and sends relay commands. A short press toggles
//! the relay; holding the button switches it off.
//!
//! Contact bounce is not filtered here: every press edge becomes a command,
//! and the relay's own debounce gate drops the extra ones.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration};

use detent_core::config::ButtonConfig;

use crate::channels::{RelayAction, RelayCommand, RELAY_CMD};

/// Hold time that turns a press into "switch off" (ms)
const LONG_PRESS_MS: u64 = 2000;

/// Button task - one instance per configured button
#[embassy_executor::task(pool_size = 8)]
pub async fn button_task(mut input: Input<'static>, config: &'static ButtonConfig, relay: u8) {
    info!(
        "Button '{}' started on gpio{}",
        config.name.as_str(),
        config.pin.pin
    );

    // Buttons idle high with a pull-up; inverted buttons idle low
    let active_high = config.pin.inverted;

    loop {
        wait_for_press(&mut input, active_high).await;

        let held = with_timeout(
            Duration::from_millis(LONG_PRESS_MS),
            wait_for_release(&mut input, active_high),
        )
        .await;

        let action = match held {
            Ok(()) => RelayAction::Toggle,
            Err(_) => {
                debug!("Button '{}': long press", config.name.as_str());
                RelayAction::Set(false)
            }
        };

        RELAY_CMD.send(RelayCommand { relay, action }).await;

        if action == RelayAction::Set(false) {
            wait_for_release(&mut input, active_high).await;
        }
    }
}

async fn wait_for_press(input: &mut Input<'static>, active_high: bool) {
    if active_high {
        input.wait_for_rising_edge().await;
    } else {
        input.wait_for_falling_edge().await;
    }
}

async fn wait_for_release(input: &mut Input<'static>, active_high: bool) {
    if active_high {
        input.wait_for_falling_edge().await;
    } else {
        input.wait_for_rising_edge().await;
    }
}
