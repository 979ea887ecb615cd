//! Ship definitions: an ordered run of cells plus a hit counter.

use alloc::vec::Vec;

use crate::common::{BoardError, Coordinate};

/// Index of a ship inside the board that owns it.
pub type ShipId = usize;

/// Orientation of a straight ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship placed on the field. Its shape never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    cells: Vec<Coordinate>,
    hits: usize,
}

impl Ship {
    /// Create a ship occupying `cells`. The id is assigned by the board.
    pub fn new(cells: Vec<Coordinate>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::EmptyShip);
        }
        if let Some(bad) = cells.iter().find(|c| !c.in_bounds()) {
            return Err(BoardError::OutOfRange(*bad));
        }
        Ok(Self {
            id: 0,
            cells,
            hits: 0,
        })
    }

    /// Straight ship of `length` cells starting at `origin`.
    pub fn line(
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, BoardError> {
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => origin
                    .col
                    .checked_add(i)
                    .map(|col| Coordinate::new(origin.row, col)),
                Orientation::Vertical => origin
                    .row
                    .checked_add(i)
                    .map(|row| Coordinate::new(row, origin.col)),
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(BoardError::OutOfRange(origin))?;
        Self::new(cells)
    }

    pub(crate) fn set_id(&mut self, id: ShipId) {
        self.id = id;
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; ships have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Register one more hit and report whether the ship is now sunk.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hits < self.cells.len() {
            self.hits += 1;
        }
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.cells.len()
    }
}
