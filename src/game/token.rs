use std::fmt::Display;

use crate::game::{TeamId, TileId, team::TEAM_SIZE};

/// A token is identified by its team and its index within that team (0..4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId {
    pub team: TeamId,
    pub index: u8,
}

impl TokenId {
    pub fn new(team: TeamId, index: u8) -> Self {
        debug_assert!((index as usize) < TEAM_SIZE);
        TokenId { team, index }
    }

    pub fn all_of(team: TeamId) -> impl Iterator<Item = TokenId> {
        (0..TEAM_SIZE as u8).map(move |index| TokenId { team, index })
    }

    pub fn all() -> impl Iterator<Item = TokenId> {
        TeamId::ALL.into_iter().flat_map(TokenId::all_of)
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.team, self.index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    id: TokenId,
    tile: TileId,
}

impl Token {
    pub fn new(id: TokenId, tile: TileId) -> Self {
        Token { id, tile }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn team(&self) -> TeamId {
        self.id.team
    }

    pub fn tile(&self) -> TileId {
        self.tile
    }

    pub(crate) fn set_tile(&mut self, tile: TileId) {
        self.tile = tile;
    }
}
