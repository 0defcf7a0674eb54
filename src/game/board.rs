use crate::game::{Team, TeamId, Tile, TileId, TileKind, TokenId, layout, team::TEAM_COUNT};

/// Arena of all tiles on the board plus the static team layout.
/// Tiles refer to each other by [`TileId`], the index into the arena.
/// The graph never changes after construction, only the occupants do.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tiles: Vec<Tile>,
    teams: [Team; TEAM_COUNT],
}

impl Board {

    /// Creates the standard four-team board with every tile empty.
    pub fn new() -> Self {
        let (tiles, teams) = layout::build();
        Board { tiles, teams }
    }

    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Ring tiles in travel order.
    pub fn ring(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.kind() == TileKind::Ring)
    }

    pub fn team(&self, team: TeamId) -> &Team {
        &self.teams[team.index()]
    }

    pub fn teams(&self) -> &[Team; TEAM_COUNT] {
        &self.teams
    }

    /// Follows `steps` plain successor links. Returns `None` if the walk would step
    /// past the end of a finish lane.
    pub fn walk(&self, from: TileId, steps: u8) -> Option<TileId> {
        (0..steps).try_fold(from, |tile, _| self.tile(tile).next())
    }

    /// Same as [`Self::walk`], but a token of `team` turns into its own finish lane
    /// instead of going around the ring again.
    pub fn walk_for(&self, team: TeamId, from: TileId, steps: u8) -> Option<TileId> {
        (0..steps).try_fold(from, |tile, _| self.tile(tile).next_for(team))
    }

    /// Lowest-indexed spawn tile of `team` without an occupant.
    pub fn first_free_spawn(&self, team: TeamId) -> Option<TileId> {
        self.team(team)
            .spawns()
            .iter()
            .copied()
            .find(|&spawn| self.tile(spawn).is_free())
    }

    pub(crate) fn occupy(&mut self, tile: TileId, token: TokenId) {
        self.tiles[tile.index()].occupants_mut().push(token);
    }

    pub(crate) fn vacate(&mut self, tile: TileId, token: TokenId) -> bool {
        self.tiles[tile.index()].occupants_mut().remove(&token)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
