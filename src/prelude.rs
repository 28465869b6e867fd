//! Commonly used types for ease of import.

pub use crate::{
    AttackResult, Board, GameError, GameSession, Orientation, Phase, Side, Statistics,
    TurnOutcome,
};
