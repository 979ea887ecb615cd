//! Game board state: the cell grid, the ships that own cells, shot
//! resolution for a real layout and outcome marking for a mirrored one.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate, ShotResult};
use crate::config::{CLASSIC_FLEET_CELLS, FIELD_SIZE};
use crate::ship::{Ship, ShipId};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Water, or not yet known on a mirrored board.
    Empty,
    /// Intact part of a ship.
    Ship(ShipId),
    /// Damaged part of a ship that is still afloat.
    Hit,
    /// Part of a sunk ship.
    Kill,
    /// Water that has been fired at.
    Miss,
}

/// An N×N field. Either owns a real ship layout, or mirrors the opponent's
/// field from result codes only.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; FIELD_SIZE]; FIELD_SIZE],
    ships: Vec<Ship>,
    ship_cells: usize,
    // Ship cells known to be Hit or Kill.
    struck: usize,
}

impl Board {
    /// Build a board from a ship layout. Fails if the fleet is empty, a ship
    /// leaves the field or two ships share a cell.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self, BoardError> {
        if ships.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        let mut cells = [[Cell::Empty; FIELD_SIZE]; FIELD_SIZE];
        let mut ships = ships;
        let mut ship_cells = 0;
        for (id, ship) in ships.iter_mut().enumerate() {
            ship.set_id(id);
            for &c in ship.cells() {
                if !c.in_bounds() {
                    return Err(BoardError::OutOfRange(c));
                }
                let cell = &mut cells[c.row][c.col];
                if *cell != Cell::Empty {
                    return Err(BoardError::ShipOverlap(c));
                }
                *cell = Cell::Ship(id);
                ship_cells += 1;
            }
        }
        Ok(Self {
            cells,
            ships,
            ship_cells,
            struck: 0,
        })
    }

    /// Mirrored board for an opponent whose fleet covers `ship_cells` cells.
    pub fn mirror(ship_cells: usize) -> Self {
        Self {
            cells: [[Cell::Empty; FIELD_SIZE]; FIELD_SIZE],
            ships: Vec::new(),
            ship_cells,
            struck: 0,
        }
    }

    /// Mirrored board for an opponent playing the classic fleet.
    pub fn classic_mirror() -> Self {
        Self::mirror(CLASSIC_FLEET_CELLS)
    }

    /// `true` for a board that tracks an opponent from result codes.
    pub fn is_mirror(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ship cells this board is expected to hold.
    pub fn ship_cells(&self) -> usize {
        self.ship_cells
    }

    pub fn cell(&self, at: Coordinate) -> Result<Cell, BoardError> {
        check(at)?;
        Ok(self.cells[at.row][at.col])
    }

    /// Resolve an incoming shot against this board's layout.
    ///
    /// Firing again at a cell that is already Miss, Hit or Kill reports the
    /// same class and leaves the board untouched.
    pub fn shoot(&mut self, at: Coordinate) -> Result<ShotResult, BoardError> {
        check(at)?;
        match self.cells[at.row][at.col] {
            Cell::Empty => {
                self.cells[at.row][at.col] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            Cell::Miss => Ok(ShotResult::Miss),
            Cell::Hit => Ok(ShotResult::Hit),
            Cell::Kill => Ok(ShotResult::Kill),
            Cell::Ship(id) => {
                let ship = &mut self.ships[id];
                self.struck += 1;
                if ship.register_hit() {
                    for &c in ship.cells() {
                        self.cells[c.row][c.col] = Cell::Kill;
                    }
                    Ok(ShotResult::Kill)
                } else {
                    self.cells[at.row][at.col] = Cell::Hit;
                    Ok(ShotResult::Hit)
                }
            }
        }
    }

    pub fn mark_miss(&mut self, at: Coordinate) -> Result<(), BoardError> {
        self.mark(at, Cell::Miss)
    }

    pub fn mark_hit(&mut self, at: Coordinate) -> Result<(), BoardError> {
        self.mark(at, Cell::Hit)
    }

    /// Mark `at` as the cell that sank a ship. Neighbouring Hit cells are
    /// left alone since ships may touch.
    pub fn mark_kill(&mut self, at: Coordinate) -> Result<(), BoardError> {
        self.mark(at, Cell::Kill)
    }

    /// Record a known outcome without resolving it.
    fn mark(&mut self, at: Coordinate, to: Cell) -> Result<(), BoardError> {
        check(at)?;
        let from = self.cells[at.row][at.col];
        if from == to {
            return Ok(());
        }
        // Only unknown cells and hit cells may advance; ship cells are
        // resolved through `shoot`.
        let allowed = matches!((from, to), (Cell::Empty, _) | (Cell::Hit, Cell::Kill));
        if !allowed {
            return Err(BoardError::InvalidTransition { at, from, to });
        }
        self.cells[at.row][at.col] = to;
        if from == Cell::Empty && to != Cell::Miss {
            self.struck += 1;
        }
        Ok(())
    }

    /// `true` once every ship cell has been struck. On a real layout that
    /// means every ship is sunk; a ship cell is never struck twice.
    pub fn is_loser(&self) -> bool {
        self.struck >= self.ship_cells
    }

    /// Number of ship cells known to be Hit or Kill.
    pub fn struck_cells(&self) -> usize {
        self.struck
    }
}

fn check(at: Coordinate) -> Result<(), BoardError> {
    if at.in_bounds() {
        Ok(())
    } else {
        Err(BoardError::OutOfRange(at))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ ships: {}, ship_cells: {}, struck: {} }}",
            self.ships.len(),
            self.ship_cells,
            self.struck
        )?;
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(_) => 'O',
                    Cell::Hit => 'x',
                    Cell::Kill => 'X',
                    Cell::Miss => '*',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
