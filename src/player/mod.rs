//! Player trait and implementations
//!
//! A Player is the local move source of the turn engine:
//! - AiPlayer: seeded hunt/target shooter
//! - ConsolePlayer: interactive player reading moves from a terminal
//! - ScriptedPlayer: fixed list of moves

use crate::board::Board;
use crate::common::{Coordinate, ShotResult};

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose the next target. `None` means the player cannot or will not
    /// move, which aborts the game.
    fn select_target(&mut self, own: &Board, mirror: &Board) -> Option<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_incoming_shot(&mut self, _target: Coordinate, _result: ShotResult) {}
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn select_target(&mut self, own: &Board, mirror: &Board) -> Option<Coordinate> {
        (**self).select_target(own, mirror)
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult) {
        (**self).handle_shot_result(target, result)
    }

    fn handle_incoming_shot(&mut self, target: Coordinate, result: ShotResult) {
        (**self).handle_incoming_shot(target, result)
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::ConsolePlayer;

pub mod scripted;
pub use scripted::ScriptedPlayer;
