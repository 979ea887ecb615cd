use alloc::collections::VecDeque;

use crate::board::Board;
use crate::common::Coordinate;

use super::Player;

/// Fires a fixed sequence of moves, then runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Coordinate>,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = Coordinate>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn select_target(&mut self, _own: &Board, _mirror: &Board) -> Option<Coordinate> {
        self.moves.pop_front()
    }
}
