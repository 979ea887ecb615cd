#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod error;
mod field;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
#[cfg(feature = "std")]
mod player_node;
pub mod prelude;
pub mod protocol;
mod ship;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use error::GameError;
pub use field::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::{AiPlayer, Player, ScriptedPlayer};
#[cfg(feature = "std")]
pub use player::ConsolePlayer;
#[cfg(feature = "std")]
pub use player_node::*;
pub use protocol::CodecError;
pub use ship::*;
#[cfg(feature = "std")]
pub use transport::{CancelHandle, CancelToken, Channel, ChannelError, StreamChannel};
