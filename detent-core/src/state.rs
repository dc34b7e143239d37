//! Relay state

/// Logical relay state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RelayState {
    /// Output driven low
    #[default]
    Off,
    /// Output driven high
    On,
}

impl RelayState {
    /// Check if the relay is on
    pub const fn is_on(self) -> bool {
        matches!(self, RelayState::On)
    }
}

impl From<bool> for RelayState {
    fn from(on: bool) -> Self {
        if on {
            RelayState::On
        } else {
            RelayState::Off
        }
    }
}

impl From<RelayState> for bool {
    fn from(state: RelayState) -> Self {
        state.is_on()
    }
}
