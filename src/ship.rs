//! Ship definitions and per-segment hit tracking.

use alloc::vec;
use alloc::vec::Vec;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell covered by segment `index` of a ship anchored at (`row`, `col`).
    pub fn offset(self, row: usize, col: usize, index: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + index),
            Orientation::Vertical => (row + index, col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single vessel with one hit flag per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hits: Vec<bool>,
}

impl Ship {
    /// Build an undamaged ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            hits: vec![false; ship_type.length()],
        }
    }

    /// Mark segment `index` as hit. Out-of-range indices are ignored.
    pub fn hit(&mut self, index: usize) {
        if let Some(segment) = self.hits.get_mut(index) {
            *segment = true;
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Whether segment `index` has been hit; `false` when out of range.
    pub fn is_hit_at(&self, index: usize) -> bool {
        self.hits.get(index).copied().unwrap_or(false)
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.hits.len()
    }
}
