//! Game board: a 10×10 grid of cells, the ships placed on it and the list of misses.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipType};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Segment `segment` of the ship stored at `ship` in [`Board::ships`].
    Occupied { ship: usize, segment: usize },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// How a cell should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellView {
    /// Empty and never attacked.
    Water,
    /// Intact ship segment.
    Ship,
    /// Hit segment of a ship still afloat.
    Hit,
    /// Segment of a sunk ship.
    Sunk,
    /// Attacked empty cell.
    Miss,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: Vec<Ship>,
    misses: Vec<(usize, usize)>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed, no misses).
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::new(),
            misses: Vec::new(),
        }
    }

    /// Place `ship` with its first segment at (`row`, `col`).
    ///
    /// Every segment must land in bounds on an empty cell. On failure the
    /// board is left untouched.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let len = ship.length();
        if len == 0 {
            return Err(BoardError::InvalidLength);
        }
        for i in 0..len {
            let (r, c) = orientation.offset(row, col, i);
            if r >= GRID_SIZE || c >= GRID_SIZE {
                return Err(BoardError::ShipOutOfBounds);
            }
            if !self.grid[r][c].is_empty() {
                return Err(BoardError::ShipOverlaps);
            }
        }

        let id = self.ships.len();
        for segment in 0..len {
            let (r, c) = orientation.offset(row, col, segment);
            self.grid[r][c] = Cell::Occupied { ship: id, segment };
        }
        debug!(
            "placed {} (len {}) at ({}, {}) {:?}",
            ship.name(),
            len,
            row,
            col,
            orientation
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Place a fresh ship of `ship_type` at a uniformly random origin and
    /// orientation, retrying until a valid spot is found.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..GRID_SIZE);
            let col = rng.random_range(0..GRID_SIZE);
            let orientation = if rng.random_bool(0.5) {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            match self.place_ship(Ship::new(ship_type), row, col, orientation) {
                Ok(()) => return Ok((row, col, orientation)),
                Err(BoardError::InvalidLength) => return Err(BoardError::InvalidLength),
                Err(_) => continue,
            }
        }
        warn!("gave up placing {} after {} attempts", ship_type.name(), MAX_PLACEMENT_ATTEMPTS);
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an attack at (`row`, `col`).
    ///
    /// Empty cells append to the miss list, even when the same cell was
    /// missed before. Occupied cells forward the hit to the ship.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<AttackResult, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        match self.grid[row][col] {
            Cell::Empty => {
                self.misses.push((row, col));
                debug!("attack at ({}, {}) missed", row, col);
                Ok(AttackResult::Miss)
            }
            Cell::Occupied { ship, segment } => {
                let target = &mut self.ships[ship];
                let was_sunk = target.is_sunk();
                target.hit(segment);
                debug!("attack at ({}, {}) hit {}", row, col, target.name());
                if target.is_sunk() && !was_sunk {
                    Ok(AttackResult::Sink(target.name()))
                } else {
                    Ok(AttackResult::Hit)
                }
            }
        }
    }

    /// `true` when every placed ship is sunk; vacuously `true` with no ships.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Copy of the whole grid.
    pub fn grid(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        self.grid
    }

    /// Cell at (`row`, `col`), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Missed attacks in the order they happened.
    pub fn misses(&self) -> &[(usize, usize)] {
        &self.misses
    }

    pub fn is_missed(&self, row: usize, col: usize) -> bool {
        self.misses.contains(&(row, col))
    }

    /// Ship and segment index occupying (`row`, `col`).
    pub fn ship_at(&self, row: usize, col: usize) -> Option<(&Ship, usize)> {
        match self.cell(row, col)? {
            Cell::Empty => None,
            Cell::Occupied { ship, segment } => Some((&self.ships[ship], segment)),
        }
    }

    /// Whether the ship covering (`row`, `col`) is sunk.
    pub fn is_sunk_at(&self, row: usize, col: usize) -> bool {
        self.ship_at(row, col)
            .map(|(ship, _)| ship.is_sunk())
            .unwrap_or(false)
    }

    /// Classify (`row`, `col`) for rendering, or `None` outside the grid.
    pub fn cell_view(&self, row: usize, col: usize) -> Option<CellView> {
        let view = match self.cell(row, col)? {
            Cell::Empty if self.is_missed(row, col) => CellView::Miss,
            Cell::Empty => CellView::Water,
            Cell::Occupied { ship, segment } => {
                let ship = &self.ships[ship];
                if ship.is_sunk() {
                    CellView::Sunk
                } else if ship.is_hit_at(segment) {
                    CellView::Hit
                } else {
                    CellView::Ship
                }
            }
        };
        Some(view)
    }

    /// Number of cells covered by ships.
    pub fn occupied_cells(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ ships: {:?}, misses: {:?}, occupied: {} }}",
            self.ships,
            self.misses,
            self.occupied_cells()
        )
    }
}
