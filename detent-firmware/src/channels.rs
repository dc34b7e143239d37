//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Channel capacity for relay commands
const RELAY_CHANNEL_SIZE: usize = 8;

/// What to do with a relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum RelayAction {
    /// Flip the current state
    Toggle,
    /// Request a specific state (true = on)
    Set(bool),
}

/// Relay command addressed by slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct RelayCommand {
    /// Index into the relay task's relay list
    pub relay: u8,
    pub action: RelayAction,
}

/// Relay commands from button tasks to the relay task
pub static RELAY_CMD: Channel<CriticalSectionRawMutex, RelayCommand, RELAY_CHANNEL_SIZE> =
    Channel::new();
