//! Error types for the game core and its configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::{TeamId, TileId, TokenId};

/// Reasons a move attempt is refused. A refused move leaves the board untouched
/// and the same team keeps the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{token} can only leave spawn on a 1 or a 6, rolled {roll}")]
    SpawnLocked { token: TokenId, roll: u8 },

    #[error("{token} would move past the end of its finish lane")]
    Overshoot { token: TokenId },

    #[error("{token} cannot land on {tile}, it is held by {occupant}")]
    Blocked {
        token: TokenId,
        tile: TileId,
        occupant: TokenId,
    },

    #[error("captured {token} has no free spawn tile, every {team} spawn is taken")]
    NoFreeSpawn { token: TokenId, team: TeamId },

    #[error("the die has not been rolled")]
    NotRolled,
}

/// Errors from arranging a position by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{tile} is already held by {occupant}")]
    TileOccupied { tile: TileId, occupant: TokenId },

    #[error("{value} is not a face of a {sides}-sided die")]
    InvalidDieValue { value: u8, sides: u8 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
