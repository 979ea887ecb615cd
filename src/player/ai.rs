use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Cell};
use crate::common::{Coordinate, ShotResult};
use crate::config::FIELD_SIZE;

use super::Player;

/// Hunt/target shooter: fires at random unknown cells until it hits, then
/// works along the damaged ship until it sinks.
pub struct AiPlayer {
    rng: SmallRng,
    // Hits on the ship currently being chased.
    wounded: Vec<Coordinate>,
    targets: Vec<Coordinate>,
    // Cells that cannot hold a ship when ships never touch.
    excluded: [[bool; FIELD_SIZE]; FIELD_SIZE],
}

impl AiPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            wounded: Vec::new(),
            targets: Vec::new(),
            excluded: [[false; FIELD_SIZE]; FIELD_SIZE],
        }
    }

    fn exclude_around(&mut self, cells: &[Coordinate]) {
        for c in cells {
            for n in c.surroundings() {
                self.excluded[n.row][n.col] = true;
            }
        }
    }

    fn retarget(&mut self) {
        self.targets.clear();
        let Some(&last) = self.wounded.last() else {
            return;
        };
        if self.wounded.len() == 1 {
            self.targets.extend(last.neighbours());
            return;
        }
        let (min, max) = self
            .wounded
            .iter()
            .fold((last, last), |(lo, hi), &c| (lo.min(c), hi.max(c)));
        let candidates = if min.row == max.row {
            [
                min.col.checked_sub(1).map(|col| Coordinate::new(min.row, col)),
                Some(Coordinate::new(max.row, max.col + 1)),
            ]
        } else {
            [
                min.row.checked_sub(1).map(|row| Coordinate::new(row, min.col)),
                Some(Coordinate::new(max.row + 1, max.col)),
            ]
        };
        self.targets
            .extend(candidates.into_iter().flatten().filter(Coordinate::in_bounds));
    }

    fn random_unknown(&mut self, mirror: &Board) -> Option<Coordinate> {
        let unknown: Vec<Coordinate> = Coordinate::all()
            .filter(|&c| matches!(mirror.cell(c), Ok(Cell::Empty)))
            .collect();
        let preferred: Vec<Coordinate> = unknown
            .iter()
            .copied()
            .filter(|c| !self.excluded[c.row][c.col])
            .collect();
        let pool = if preferred.is_empty() { unknown } else { preferred };
        if pool.is_empty() {
            return None;
        }
        Some(pool[self.rng.random_range(0..pool.len())])
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, _own: &Board, mirror: &Board) -> Option<Coordinate> {
        while let Some(c) = self.targets.pop() {
            if matches!(mirror.cell(c), Ok(Cell::Empty)) && !self.excluded[c.row][c.col] {
                return Some(c);
            }
        }
        self.random_unknown(mirror)
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult) {
        match result {
            ShotResult::Miss => {}
            ShotResult::Hit => {
                self.wounded.push(target);
                // Diagonal neighbours of a hit cell are water when ships
                // never touch.
                for n in target.surroundings() {
                    if n.row != target.row && n.col != target.col {
                        self.excluded[n.row][n.col] = true;
                    }
                }
                self.retarget();
            }
            ShotResult::Kill => {
                self.wounded.push(target);
                let sunk = core::mem::take(&mut self.wounded);
                self.exclude_around(&sunk);
                self.targets.clear();
            }
        }
    }
}
