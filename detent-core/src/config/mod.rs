//! Configuration types
//!
//! Board-agnostic relay configuration and the parser for the config file
//! embedded in the firmware image.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
