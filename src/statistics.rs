//! Win/loss and shot counters kept across games.

use alloc::format;
use alloc::string::String;

/// Snapshot returned by [`Statistics::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct StatsReport {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Hit percentage with two decimals, `"0.00"` before any shot.
    pub hit_accuracy: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    games_played: u32,
    wins: u32,
    losses: u32,
    shots: u32,
    hits: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game as a win or a loss.
    pub fn record_game(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn record_shot(&mut self, hit: bool) {
        self.shots += 1;
        if hit {
            self.hits += 1;
        }
    }

    pub fn report(&self) -> StatsReport {
        let hit_accuracy = if self.shots > 0 {
            // hundredths of a percent, ties rounded up
            let shots = u64::from(self.shots);
            let scaled = u64::from(self.hits) * 10_000;
            let hundredths = (2 * scaled + shots) / (2 * shots);
            format!("{}.{:02}", hundredths / 100, hundredths % 100)
        } else {
            String::from("0.00")
        };
        StatsReport {
            games_played: self.games_played,
            wins: self.wins,
            losses: self.losses,
            hit_accuracy,
        }
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }
}
