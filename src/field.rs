//! Field generation: seeded random fleet placement and ASCII layouts.

use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::{fleet_cells, CLASSIC_FLEET, FIELD_SIZE};
use crate::ship::{Orientation, Ship};

/// Random positions tried for one ship before the layout is restarted.
const PLACEMENT_TRIES: usize = 100;

/// Produces the local board at game start.
pub trait FieldGenerator {
    /// Must return the same layout for the same seed.
    fn generate(&self, seed: u64) -> Result<Board, BoardError>;
}

/// Whether ships may touch each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Ships may not share an edge or a corner.
    Forbidden,
    /// Ships may touch but never overlap.
    Allowed,
}

/// Places straight ships at random positions derived from the seed.
#[derive(Debug, Clone)]
pub struct RandomField {
    fleet: Vec<usize>,
    adjacency: Adjacency,
    max_attempts: usize,
}

impl Default for RandomField {
    /// Classic fleet with non-touching ships.
    fn default() -> Self {
        Self::new(&CLASSIC_FLEET, Adjacency::Forbidden)
    }
}

impl RandomField {
    pub fn new(fleet: &[usize], adjacency: Adjacency) -> Self {
        Self {
            fleet: fleet.to_vec(),
            adjacency,
            max_attempts: 1000,
        }
    }

    /// Number of full layouts tried before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Total ship cells of the configured fleet.
    pub fn fleet_cells(&self) -> usize {
        fleet_cells(&self.fleet)
    }

    fn try_layout(&self, rng: &mut SmallRng) -> Option<Vec<Ship>> {
        let mut occupied = [[false; FIELD_SIZE]; FIELD_SIZE];
        let mut ships = Vec::with_capacity(self.fleet.len());
        for &length in &self.fleet {
            let ship = (0..PLACEMENT_TRIES).find_map(|_| {
                let ship = random_line(rng, length)?;
                self.fits(&occupied, &ship).then_some(ship)
            })?;
            for c in ship.cells() {
                occupied[c.row][c.col] = true;
            }
            ships.push(ship);
        }
        Some(ships)
    }

    fn fits(&self, occupied: &[[bool; FIELD_SIZE]; FIELD_SIZE], ship: &Ship) -> bool {
        ship.cells().iter().all(|&c| {
            !occupied[c.row][c.col]
                && match self.adjacency {
                    Adjacency::Allowed => true,
                    Adjacency::Forbidden => c.surroundings().all(|n| !occupied[n.row][n.col]),
                }
        })
    }
}

fn random_line(rng: &mut SmallRng, length: usize) -> Option<Ship> {
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orientation {
        Orientation::Horizontal => (FIELD_SIZE - 1, FIELD_SIZE - length),
        Orientation::Vertical => (FIELD_SIZE - length, FIELD_SIZE - 1),
    };
    let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
    Ship::line(origin, orientation, length).ok()
}

impl FieldGenerator for RandomField {
    fn generate(&self, seed: u64) -> Result<Board, BoardError> {
        if self.fleet.iter().any(|&len| len == 0) {
            return Err(BoardError::EmptyShip);
        }
        if self.fleet.iter().any(|&len| len > FIELD_SIZE) {
            return Err(BoardError::UnableToPlaceFleet { attempts: 0 });
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..self.max_attempts {
            if let Some(ships) = self.try_layout(&mut rng) {
                return Board::from_ships(ships);
            }
        }
        Err(BoardError::UnableToPlaceFleet {
            attempts: self.max_attempts,
        })
    }
}

impl Board {
    /// Parse an ASCII layout: one line per row, `#` (or `O`) for a ship cell
    /// and `.` for water. Whitespace inside a line and blank lines are
    /// ignored. Each orthogonally connected group of ship cells is one ship.
    pub fn from_layout(text: &str) -> Result<Self, BoardError> {
        let mut grid = [[false; FIELD_SIZE]; FIELD_SIZE];
        let mut row = 0;
        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let mut cells = line.chars().filter(|ch| !ch.is_whitespace()).peekable();
            if cells.peek().is_none() {
                continue;
            }
            if row == FIELD_SIZE {
                return Err(BoardError::BadLayout {
                    line: line_no,
                    reason: "too many rows",
                });
            }
            let mut col = 0;
            for ch in cells {
                if col == FIELD_SIZE {
                    return Err(BoardError::BadLayout {
                        line: line_no,
                        reason: "row too long",
                    });
                }
                grid[row][col] = match ch {
                    '#' | 'O' | 'o' => true,
                    '.' => false,
                    _ => {
                        return Err(BoardError::BadLayout {
                            line: line_no,
                            reason: "unexpected character",
                        })
                    }
                };
                col += 1;
            }
            if col != FIELD_SIZE {
                return Err(BoardError::BadLayout {
                    line: line_no,
                    reason: "row too short",
                });
            }
            row += 1;
        }
        if row != FIELD_SIZE {
            return Err(BoardError::BadLayout {
                line: text.lines().count(),
                reason: "too few rows",
            });
        }

        let mut seen = [[false; FIELD_SIZE]; FIELD_SIZE];
        let mut ships = Vec::new();
        for start in Coordinate::all() {
            if !grid[start.row][start.col] || seen[start.row][start.col] {
                continue;
            }
            seen[start.row][start.col] = true;
            let mut cells = vec![start];
            let mut next = 0;
            while next < cells.len() {
                let c = cells[next];
                next += 1;
                for n in c.neighbours() {
                    if grid[n.row][n.col] && !seen[n.row][n.col] {
                        seen[n.row][n.col] = true;
                        cells.push(n);
                    }
                }
            }
            cells.sort();
            ships.push(Ship::new(cells)?);
        }
        Board::from_ships(ships)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_layout(s)
    }
}
