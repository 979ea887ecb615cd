//! Turn ownership and win detection over the local board and the mirrored
//! opponent board. Transport-free: the node feeds it decoded frames.

use thiserror::Error;

use crate::board::Board;
use crate::common::{BoardError, Coordinate, ShotResult};

/// Which side may send the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// We own the turn and fire next.
    Firing,
    /// The opponent owns the turn; we wait for its move.
    AwaitingShot,
    /// Terminal. No more frames are sent or expected.
    Ended,
}

/// Result derived from the two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    LocalWon,
    RemoteWon,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("operation not allowed while {0:?}")]
    OutOfTurn(TurnState),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Both boards of one player plus turn ownership.
#[derive(Debug, Clone)]
pub struct Game {
    own: Board,
    mirror: Board,
    state: TurnState,
}

impl Game {
    /// Start a game. `first_move` decides who fires first; it is agreed out
    /// of band and not tied to who opened the connection.
    pub fn new(own: Board, mirror: Board, first_move: bool) -> Self {
        let state = if first_move {
            TurnState::Firing
        } else {
            TurnState::AwaitingShot
        };
        Self { own, mirror, state }
    }

    pub fn own(&self) -> &Board {
        &self.own
    }

    pub fn mirror(&self) -> &Board {
        &self.mirror
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        if self.own.is_loser() {
            GameStatus::RemoteWon
        } else if self.mirror.is_loser() {
            GameStatus::LocalWon
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply the result the opponent reported for our shot at `target`.
    pub fn record_fired(
        &mut self,
        target: Coordinate,
        result: ShotResult,
    ) -> Result<TurnState, TurnError> {
        self.ensure(TurnState::Firing)?;
        match result {
            ShotResult::Miss => self.mirror.mark_miss(target)?,
            ShotResult::Hit => self.mirror.mark_hit(target)?,
            ShotResult::Kill => self.mirror.mark_kill(target)?,
        }
        self.state = if self.mirror.is_loser() {
            TurnState::Ended
        } else if result.keeps_turn() {
            TurnState::Firing
        } else {
            TurnState::AwaitingShot
        };
        Ok(self.state)
    }

    /// Resolve the opponent's shot at `target` against our board.
    pub fn resolve_incoming(&mut self, target: Coordinate) -> Result<ShotResult, TurnError> {
        self.ensure(TurnState::AwaitingShot)?;
        let result = self.own.shoot(target)?;
        self.state = if self.own.is_loser() {
            TurnState::Ended
        } else if result.keeps_turn() {
            TurnState::AwaitingShot
        } else {
            TurnState::Firing
        };
        Ok(result)
    }

    /// Stop the game regardless of the boards.
    pub fn end(&mut self) {
        self.state = TurnState::Ended;
    }

    fn ensure(&self, state: TurnState) -> Result<(), TurnError> {
        if self.state == state {
            Ok(())
        } else {
            Err(TurnError::OutOfTurn(self.state))
        }
    }
}
