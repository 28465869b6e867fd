//! Players and their attack strategies.
//!
//! A [`Player`] owns a board and a [`Targeting`] strategy chosen at
//! construction:
//! - [`ManualTargeting`]: fires at the coordinate supplied by the caller
//! - [`RandomTargeting`]: picks uniformly random cells, skipping cells
//!   already in the opponent's miss list

use alloc::boxed::Box;
use core::fmt;
use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackResult, GameError};
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Chooses where a player fires next.
pub trait Targeting {
    /// Pick the next target on `target`. `requested` is the coordinate the
    /// caller asked for, if any. Returns `None` when no target can be chosen.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
        requested: Option<(usize, usize)>,
    ) -> Option<(usize, usize)>;

    /// `true` for strategies that ignore the requested coordinate.
    fn is_automatic(&self) -> bool;
}

/// Fires exactly where the caller says, with no duplicate guard.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualTargeting;

impl Targeting for ManualTargeting {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _target: &Board,
        requested: Option<(usize, usize)>,
    ) -> Option<(usize, usize)> {
        requested
    }

    fn is_automatic(&self) -> bool {
        false
    }
}

/// Samples uniformly random cells until one is not a previous miss.
///
/// Previously hit cells are not excluded, so a damaged segment may be
/// fired at again; the repeat hit has no further effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeting;

impl Targeting for RandomTargeting {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
        _requested: Option<(usize, usize)>,
    ) -> Option<(usize, usize)> {
        let mut missed = [[false; GRID_SIZE]; GRID_SIZE];
        for &(r, c) in target.misses() {
            if r < GRID_SIZE && c < GRID_SIZE {
                missed[r][c] = true;
            }
        }
        if missed.iter().flatten().all(|&m| m) {
            return None;
        }
        loop {
            let row = rng.random_range(0..GRID_SIZE);
            let col = rng.random_range(0..GRID_SIZE);
            if !missed[row][col] {
                return Some((row, col));
            }
        }
    }

    fn is_automatic(&self) -> bool {
        true
    }
}

/// Coordinates and outcome of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub row: usize,
    pub col: usize,
    pub result: AttackResult,
}

/// A board paired with an attack strategy.
pub struct Player {
    board: Board,
    targeting: Box<dyn Targeting>,
}

impl Player {
    /// Player whose shots are supplied by the caller.
    pub fn human() -> Self {
        Self::with_targeting(Box::new(ManualTargeting))
    }

    /// Player that picks its own random shots.
    pub fn computer() -> Self {
        Self::with_targeting(Box::new(RandomTargeting))
    }

    pub fn with_targeting(targeting: Box<dyn Targeting>) -> Self {
        Self {
            board: Board::new(),
            targeting,
        }
    }

    pub fn is_computer(&self) -> bool {
        self.targeting.is_automatic()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Swap in a new board, returning the old one.
    pub fn replace_board(&mut self, board: Board) -> Board {
        core::mem::replace(&mut self.board, board)
    }

    /// Fire one shot at `target`.
    ///
    /// Manual players need `requested`; automatic players ignore it.
    pub fn attack(
        &mut self,
        target: &mut Board,
        rng: &mut SmallRng,
        requested: Option<(usize, usize)>,
    ) -> Result<Shot, GameError> {
        let (row, col) = match self.targeting.select_target(rng, target, requested) {
            Some(coord) => coord,
            None if self.is_computer() => return Err(GameError::NoTargetAvailable),
            None => return Err(GameError::MissingTarget),
        };
        let result = target.receive_attack(row, col)?;
        debug!(
            "{} fired at ({}, {}): {:?}",
            if self.is_computer() { "computer" } else { "human" },
            row,
            col,
            result
        );
        Ok(Shot { row, col, result })
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("computer", &self.is_computer())
            .field("board", &self.board)
            .finish()
    }
}
