//! Common types for the sea battle core: coordinates, shot results and board errors.

use core::fmt;
use thiserror::Error;

use crate::config::FIELD_SIZE;

/// A cell position on the field, both components zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when both components lie inside the field.
    pub const fn in_bounds(&self) -> bool {
        self.row < FIELD_SIZE && self.col < FIELD_SIZE
    }

    /// Orthogonal neighbours that lie inside the field.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        self.around(&[(-1, 0), (1, 0), (0, -1), (0, 1)])
    }

    /// All eight surrounding cells that lie inside the field.
    pub fn surroundings(self) -> impl Iterator<Item = Coordinate> {
        self.around(&[
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ])
    }

    fn around(self, offsets: &'static [(isize, isize)]) -> impl Iterator<Item = Coordinate> {
        offsets.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            let c = Coordinate::new(row, col);
            c.in_bounds().then_some(c)
        })
    }

    /// Iterate every cell of the field in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..FIELD_SIZE).flat_map(|row| (0..FIELD_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

/// Formats as move notation, e.g. `A1` for (0, 0) and `C3` for (2, 2).
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Outcome of one shot against one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The shot landed in water.
    Miss,
    /// The shot damaged a ship that is still afloat.
    Hit,
    /// The shot sank a ship.
    Kill,
}

impl ShotResult {
    /// `true` when the shooter keeps the turn.
    pub fn keeps_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by board construction and board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate {0} is outside the {n}x{n} field", n = FIELD_SIZE)]
    OutOfRange(Coordinate),
    #[error("cell {at} cannot go from {from:?} to {to:?}")]
    InvalidTransition {
        at: Coordinate,
        from: crate::board::Cell,
        to: crate::board::Cell,
    },
    #[error("ships overlap at {0}")]
    ShipOverlap(Coordinate),
    #[error("a ship must occupy at least one cell")]
    EmptyShip,
    #[error("a board needs at least one ship")]
    EmptyFleet,
    #[error("unable to place the fleet after {attempts} attempts")]
    UnableToPlaceFleet { attempts: usize },
    #[error("bad layout at line {line}: {reason}")]
    BadLayout { line: usize, reason: &'static str },
}
