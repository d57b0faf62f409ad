//! Console front end for tictac_core.
//!
//! - **Console**: interactive loop over any reader/writer pair
//! - **Replay**: plays a move list and prints or exports the result
//! - **Config**: TOML settings for rendering and player names

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod replay;

pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
pub use console::{Console, ConsoleError};
pub use replay::run_replay;
