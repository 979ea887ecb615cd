//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Coordinate, FieldGenerator, Game, GameStatus, Player, RandomField,
    ShotResult, TurnState, CLASSIC_FLEET_CELLS,
};

#[cfg(feature = "std")]
pub use crate::{ui::print_field_pair, ConsolePlayer, GameError, GameOutcome, PlayerNode};

#[cfg(feature = "std")]
pub use crate::transport::{in_memory, tcp::TcpChannel, CancelHandle, Channel, StreamChannel};
