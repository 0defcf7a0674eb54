use std::fmt::Display;

use crate::game::{Color, TileId};

/// Number of tokens every team owns, and the number of spawn tiles it has.
pub const TEAM_SIZE: usize = 4;

/// Number of teams taking part in a game.
pub const TEAM_COUNT: usize = 4;

/// The four teams in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamId {
    Red,
    Green,
    Blue,
    Yellow,
}

impl TeamId {
    pub const ALL: [TeamId; TEAM_COUNT] = [TeamId::Red, TeamId::Green, TeamId::Blue, TeamId::Yellow];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> TeamId {
        Self::ALL[index % TEAM_COUNT]
    }

    /// The team that acts after this one.
    pub fn next(&self) -> TeamId {
        Self::from_index(self.index() + 1)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TeamId::Red => "Red",
            TeamId::Green => "Green",
            TeamId::Blue => "Blue",
            TeamId::Yellow => "Yellow",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TeamId::Red => Color::rgb(0xEE, 0x11, 0x11),
            TeamId::Green => Color::rgb(0x00, 0xAA, 0x22),
            TeamId::Blue => Color::rgb(0x00, 0x44, 0xFF),
            TeamId::Yellow => Color::rgb(0xFF, 0xDD, 0x00),
        }
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of where a team lives on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    spawns: [TileId; TEAM_SIZE],
    entry: TileId,
    branch: TileId,
    lane: [TileId; 2],
}

impl Team {
    pub fn new(id: TeamId, spawns: [TileId; TEAM_SIZE], entry: TileId, branch: TileId, lane: [TileId; 2]) -> Self {
        Team { id, spawns, entry, branch, lane }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Spawn tiles in the order they are filled, both at game start and on capture.
    pub fn spawns(&self) -> &[TileId; TEAM_SIZE] {
        &self.spawns
    }

    /// The ring tile a token reaches when it leaves spawn.
    pub fn entry(&self) -> TileId {
        self.entry
    }

    /// The last ring tile before the finish lane.
    pub fn branch(&self) -> TileId {
        self.branch
    }

    pub fn lane(&self) -> &[TileId; 2] {
        &self.lane
    }

    /// Terminal tile of the finish lane.
    pub fn goal(&self) -> TileId {
        self.lane[self.lane.len() - 1]
    }
}
