#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
pub mod display;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
mod ship;
mod statistics;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level, LOG_ENV_VAR};
pub use player::*;
pub use ship::*;
pub use statistics::*;
