//! Common types: attack results and the error enums shared by board and game.

/// Result of an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    /// Attack landed on empty water.
    Miss,
    /// Attack hit a ship segment.
    Hit,
    /// Attack sank a ship, carrying its name.
    Sink(&'static str),
}

impl AttackResult {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Attack coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship has zero length.
    InvalidLength,
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InvalidLength => write!(f, "Ship length must be positive"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by `GameSession` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Command only valid while ships are being placed.
    NotInPlacement,
    /// Every ship of the fleet is already on the board.
    FleetComplete,
    /// Placement cannot end before the whole fleet is placed.
    FleetIncomplete,
    /// Command only valid while the game is in progress.
    NotInProgress,
    /// A manual attack was requested without coordinates.
    MissingTarget,
    /// Every cell of the target board has already been missed.
    NoTargetAvailable,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::NotInPlacement => write!(f, "Game is not in the placement phase"),
            GameError::FleetComplete => write!(f, "All ships have already been placed"),
            GameError::FleetIncomplete => write!(f, "Not all ships have been placed yet"),
            GameError::NotInProgress => write!(f, "Game is not in progress"),
            GameError::MissingTarget => write!(f, "No target coordinate supplied"),
            GameError::NoTargetAvailable => write!(f, "No untried target remains"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
