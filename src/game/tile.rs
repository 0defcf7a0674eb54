use std::fmt::{Debug, Display};

use crate::{game::{TeamId, TokenId}, misc::TinyVec};

/// Index of a tile in the board arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u8);

impl TileId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Debug for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Spawn,
    Ring,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::rgb(0xFA, 0xFA, 0xF0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Tokens standing on one tile. Only a team's goal ever holds more than one.
pub type Occupants = TinyVec<TokenId, 4>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    id: TileId,
    kind: TileKind,
    next: Option<TileId>,
    lane: Option<(TeamId, TileId)>,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
    occupants: Occupants,
}

impl Tile {
    pub fn new(id: TileId, kind: TileKind, next: Option<TileId>, (x, y): (f32, f32), size: f32, color: Color) -> Self {
        Tile {
            id,
            kind,
            next,
            lane: None,
            x,
            y,
            size,
            color,
            occupants: Occupants::new(),
        }
    }

    /// Marks this ring tile as the point where `team` turns into its finish lane.
    pub fn with_lane(mut self, team: TeamId, lane_start: TileId) -> Self {
        self.lane = Some((team, lane_start));
        self
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// Plain successor, ignoring finish-lane branches. `None` ends a finish lane.
    pub fn next(&self) -> Option<TileId> {
        self.next
    }

    /// Successor as seen by a token of `team`.
    pub fn next_for(&self, team: TeamId) -> Option<TileId> {
        match self.lane {
            Some((lane_team, lane_start)) if lane_team == team => Some(lane_start),
            _ => self.next,
        }
    }

    pub fn lane(&self) -> Option<(TeamId, TileId)> {
        self.lane
    }

    /// Top-left corner on the board, origin at the top-left of the board.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn occupants(&self) -> &Occupants {
        &self.occupants
    }

    pub fn occupant(&self) -> Option<TokenId> {
        self.occupants.first().copied()
    }

    pub fn is_free(&self) -> bool {
        self.occupants.is_empty()
    }

    pub(crate) fn occupants_mut(&mut self) -> &mut Occupants {
        &mut self.occupants
    }
}
