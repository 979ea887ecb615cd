#![cfg(feature = "std")]

use crate::{
    board::Board,
    common::{Coordinate, ShotResult},
    error::GameError,
    game::{Game, GameStatus, TurnState},
    player::Player,
    protocol,
    transport::Channel,
};

/// Final or current result of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    LocalWon,
    RemoteWon,
    /// The game stopped on a protocol or transport failure.
    Aborted(GameError),
}

impl GameOutcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Drives one game over one channel: local moves come from the player,
/// incoming moves are resolved against the local board.
pub struct PlayerNode {
    player: Box<dyn Player>,
    game: Game,
    channel: Box<dyn Channel>,
    abort: Option<GameError>,
    shots_fired: usize,
    shots_received: usize,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, game: Game, channel: Box<dyn Channel>) -> Self {
        Self {
            player,
            game,
            channel,
            abort: None,
            shots_fired: 0,
            shots_received: 0,
        }
    }

    /// Node for the usual setup: our generated board against an opponent
    /// whose fleet covers `opponent_cells` cells.
    pub fn with_board(
        player: Box<dyn Player>,
        own: Board,
        opponent_cells: usize,
        channel: Box<dyn Channel>,
        first_move: bool,
    ) -> Self {
        Self::new(
            player,
            Game::new(own, Board::mirror(opponent_cells), first_move),
            channel,
        )
    }

    /// Play rounds until the game ends.
    pub async fn run(&mut self) -> GameOutcome {
        log::info!(
            "game started, {}",
            match self.game.state() {
                TurnState::Firing => "we fire first",
                _ => "opponent fires first",
            }
        );
        while self.step().await != TurnState::Ended {}
        let outcome = self.outcome();
        match &outcome {
            GameOutcome::Aborted(reason) => log::warn!("game aborted: {}", reason),
            other => log::info!(
                "game over: {:?} after {} shots fired, {} received",
                other,
                self.shots_fired,
                self.shots_received
            ),
        }
        outcome
    }

    /// Play one complete round and return the resulting turn state.
    pub async fn step(&mut self) -> TurnState {
        let round = match self.game.state() {
            TurnState::Firing => self.fire().await,
            TurnState::AwaitingShot => self.answer().await,
            TurnState::Ended => return TurnState::Ended,
        };
        if let Err(reason) = round {
            // The peer may be blocked waiting on us; let it see the close.
            if let Err(e) = self.channel.shutdown().await {
                log::debug!("closing channel after abort: {}", e);
            }
            self.abort = Some(reason);
            self.game.end();
        }
        self.game.state()
    }

    async fn fire(&mut self) -> Result<(), GameError> {
        let target = self
            .player
            .select_target(self.game.own(), self.game.mirror())
            .ok_or(GameError::NoMove)?;
        protocol::send_move(&mut self.channel, target).await?;
        let result = protocol::recv_result(&mut self.channel).await?;
        let next = self.game.record_fired(target, result)?;
        self.shots_fired += 1;
        log::debug!("fired at {}: {:?}, next {:?}", target, result, next);
        self.player.handle_shot_result(target, result);
        Ok(())
    }

    async fn answer(&mut self) -> Result<(), GameError> {
        let target: Coordinate = protocol::recv_move(&mut self.channel).await?;
        let result: ShotResult = self.game.resolve_incoming(target)?;
        self.shots_received += 1;
        log::debug!("opponent fired at {}: {:?}", target, result);
        protocol::send_result(&mut self.channel, result).await?;
        self.player.handle_incoming_shot(target, result);
        Ok(())
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(reason) = &self.abort {
            return GameOutcome::Aborted(reason.clone());
        }
        match self.game.status() {
            GameStatus::InProgress => GameOutcome::InProgress,
            GameStatus::LocalWon => GameOutcome::LocalWon,
            GameStatus::RemoteWon => GameOutcome::RemoteWon,
        }
    }

    pub fn state(&self) -> TurnState {
        self.game.state()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    pub fn shots_received(&self) -> usize {
        self.shots_received
    }
}
