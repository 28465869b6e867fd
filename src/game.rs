//! Game session: placement phase, strict turn alternation and win detection.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::{AttackResult, GameError};
use crate::config::{ship_lengths, NUM_SHIPS, SHIPS};
use crate::player::Player;
use crate::ship::{Orientation, Ship, ShipType};
use crate::statistics::Statistics;

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    Placement,
    InProgress,
    Finished,
}

/// Which side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Result of one [`GameSession::play_turn`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnOutcome {
    /// Side that fired this turn.
    pub shooter: Side,
    pub hit: bool,
    /// The shot sank a ship.
    pub sunk: bool,
    pub game_over: bool,
    pub winner: Option<Side>,
    /// Coordinates chosen by the computer; `None` on human turns.
    pub target: Option<(usize, usize)>,
}

/// Human-vs-computer game state machine.
#[derive(Debug)]
pub struct GameSession {
    rng: SmallRng,
    human: Player,
    computer: Player,
    current: Side,
    phase: Phase,
    ship_index: usize,
    winner: Option<Side>,
}

#[cfg(feature = "std")]
impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// New session seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::from_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// New session with a reproducible RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// New session in the placement phase, drawing randomness from `rng`.
    pub fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            human: Player::human(),
            computer: Player::computer(),
            current: Side::Human,
            phase: Phase::Placement,
            ship_index: 0,
            winner: None,
        }
    }

    /// Start over with two fresh players in the placement phase.
    /// Statistics are not touched.
    pub fn initialize_game(&mut self) {
        self.human = Player::human();
        self.computer = Player::computer();
        self.current = Side::Human;
        self.phase = Phase::Placement;
        self.ship_index = 0;
        self.winner = None;
        debug!("game initialized");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_placement_phase(&self) -> bool {
        self.phase == Phase::Placement
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Side whose turn it is.
    pub fn current_player(&self) -> Side {
        self.current
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Ships the human still has to place.
    pub fn remaining_ships(&self) -> usize {
        NUM_SHIPS - self.ship_index
    }

    /// Fleet lengths in placement order.
    pub fn ship_lengths(&self) -> [usize; NUM_SHIPS] {
        ship_lengths()
    }

    /// Next ship the human has to place, if any.
    pub fn next_ship(&self) -> Option<ShipType> {
        SHIPS.get(self.ship_index).copied()
    }

    /// Place the next fleet ship on the human board.
    ///
    /// On failure nothing changes and the same ship must be retried.
    pub fn place_player_ship(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotInPlacement);
        }
        let ship_type = self.next_ship().ok_or(GameError::FleetComplete)?;
        self.human
            .board_mut()
            .place_ship(Ship::new(ship_type), row, col, orientation)?;
        self.ship_index += 1;
        Ok(())
    }

    /// Randomly place every ship the human has not placed yet.
    pub fn auto_place_player_ships(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotInPlacement);
        }
        while let Some(ship_type) = self.next_ship() {
            self.human.board_mut().place_randomly(&mut self.rng, ship_type)?;
            self.ship_index += 1;
        }
        Ok(())
    }

    /// Discard the human board and restart placement from the first ship.
    pub fn reset_placement(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotInPlacement);
        }
        self.human.replace_board(Board::new());
        self.ship_index = 0;
        debug!("placement reset");
        Ok(())
    }

    /// Leave the placement phase and place the computer's fleet.
    pub fn end_placement_phase(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placement {
            return Err(GameError::NotInPlacement);
        }
        if self.remaining_ships() > 0 {
            return Err(GameError::FleetIncomplete);
        }
        let mut board = Board::new();
        for ship_type in SHIPS {
            board.place_randomly(&mut self.rng, ship_type)?;
        }
        self.computer.replace_board(board);
        self.phase = Phase::InProgress;
        debug!("placement finished, computer fleet ready");
        Ok(())
    }

    /// Play exactly one attack for the side whose turn it is.
    ///
    /// Human turns fire at `target`; computer turns ignore it and report the
    /// coordinates they chose. Only human shots are recorded in `stats`.
    pub fn play_turn(
        &mut self,
        stats: &mut Statistics,
        target: Option<(usize, usize)>,
    ) -> Result<TurnOutcome, GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::NotInProgress);
        }
        match self.current {
            Side::Human => {
                let shot = self
                    .human
                    .attack(self.computer.board_mut(), &mut self.rng, target)?;
                let hit = shot.result.is_hit();
                stats.record_shot(hit);
                let game_over = self.computer.board().all_ships_sunk();
                let sunk = matches!(shot.result, AttackResult::Sink(_));
                Ok(self.finish_turn(stats, Side::Human, hit, sunk, game_over, None))
            }
            Side::Computer => {
                let shot = self
                    .computer
                    .attack(self.human.board_mut(), &mut self.rng, None)?;
                let hit = self
                    .human
                    .board()
                    .cell(shot.row, shot.col)
                    .is_some_and(|cell| !cell.is_empty());
                let game_over = self.human.board().all_ships_sunk();
                Ok(self.finish_turn(
                    stats,
                    Side::Computer,
                    hit,
                    matches!(shot.result, AttackResult::Sink(_)),
                    game_over,
                    Some((shot.row, shot.col)),
                ))
            }
        }
    }

    fn finish_turn(
        &mut self,
        stats: &mut Statistics,
        shooter: Side,
        hit: bool,
        sunk: bool,
        game_over: bool,
        target: Option<(usize, usize)>,
    ) -> TurnOutcome {
        let winner = if game_over {
            stats.record_game(shooter == Side::Human);
            self.phase = Phase::Finished;
            self.winner = Some(shooter);
            info!("game over: {:?} wins", shooter);
            Some(shooter)
        } else {
            self.current = shooter.opponent();
            None
        };
        TurnOutcome {
            shooter,
            hit,
            sunk,
            game_over,
            winner,
            target,
        }
    }
}
