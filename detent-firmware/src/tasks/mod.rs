//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod button;
pub mod relay;

pub use button::button_task;
pub use relay::{relay_task, Relay, RelaySlot};
