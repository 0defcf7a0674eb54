use crate::{
    error::{MoveError, SetupError},
    game::{Board, TeamId, TileId, TileKind, Token, TokenId, team::{TEAM_COUNT, TEAM_SIZE}},
};

/// An opposing token knocked back to spawn by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub token: TokenId,
    pub spawn: TileId,
}

/// A fully resolved move: where the token goes and what it captures on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub token: TokenId,
    pub from: TileId,
    pub to: TileId,
    pub capture: Option<Capture>,
}

/// Board plus the position of every token. Tile occupants and token positions
/// always agree: a tile lists a token exactly when that token stands on it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    tokens: [[Token; TEAM_SIZE]; TEAM_COUNT],
}

impl GameState {
    /// Starting position: every token on its own spawn tile.
    pub fn new() -> Self {
        let mut board = Board::new();
        let tokens: [[Token; TEAM_SIZE]; TEAM_COUNT] = std::array::from_fn(|t| {
            let team = TeamId::from_index(t);
            let spawns = *board.team(team).spawns();
            std::array::from_fn(|i| Token::new(TokenId::new(team, i as u8), spawns[i]))
        });
        for token in tokens.iter().flatten() {
            board.occupy(token.tile(), token.id());
        }
        GameState { board, tokens }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.team.index()][id.index as usize]
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().flatten()
    }

    pub fn tokens_of(&self, team: TeamId) -> &[Token; TEAM_SIZE] {
        &self.tokens[team.index()]
    }

    pub fn tile_of(&self, id: TokenId) -> TileId {
        self.token(id).tile()
    }

    /// Resolves moving `token` by `roll` steps without touching the board.
    ///
    /// A token on spawn only leaves on a 1 or a 6. The walk may not run past the
    /// end of the finish lane. A token may not land on a team mate, except on the
    /// team's goal which holds all four. An opposing token on the destination is
    /// captured and sent to the lowest-indexed free spawn of its team.
    pub fn plan_move(&self, token: TokenId, roll: u8) -> Result<Move, MoveError> {
        let from = self.tile_of(token);
        let team = token.team;

        if self.board.tile(from).kind() == TileKind::Spawn && roll != 1 && roll != 6 {
            return Err(MoveError::SpawnLocked { token, roll });
        }

        let to = self
            .board
            .walk_for(team, from, roll)
            .ok_or(MoveError::Overshoot { token })?;

        let capture = match self.board.tile(to).occupant() {
            None => None,
            Some(occupant) if occupant.team == team && to == self.board.team(team).goal() => None,
            Some(occupant) if occupant.team == team => {
                return Err(MoveError::Blocked { token, tile: to, occupant });
            }
            Some(occupant) => {
                let spawn = self
                    .board
                    .first_free_spawn(occupant.team)
                    .ok_or(MoveError::NoFreeSpawn { token: occupant, team: occupant.team })?;
                Some(Capture { token: occupant, spawn })
            }
        };

        Ok(Move { token, from, to, capture })
    }

    /// Plays a move produced by [`Self::plan_move`] on this state.
    pub fn apply(&mut self, mv: &Move) {
        if let Some(capture) = mv.capture {
            self.relocate(capture.token, capture.spawn);
        }
        self.relocate(mv.token, mv.to);
    }

    /// Puts a token on any tile, bypassing the rules. Fails if the tile is held by
    /// another token, unless it is the token's own goal.
    pub fn place_token(&mut self, token: TokenId, tile: TileId) -> Result<(), SetupError> {
        let goal = self.board.team(token.team).goal();
        if let Some(occupant) = self.board.tile(tile).occupant() {
            if occupant != token && !(tile == goal && occupant.team == token.team) {
                return Err(SetupError::TileOccupied { tile, occupant });
            }
        }
        self.relocate(token, tile);
        Ok(())
    }

    fn relocate(&mut self, token: TokenId, to: TileId) {
        let from = self.tile_of(token);
        if from == to {
            return;
        }
        self.board.vacate(from, token);
        self.board.occupy(to, token);
        self.tokens[token.team.index()][token.index as usize].set_tile(to);
    }

    /// A team has won once all its tokens stand on its goal.
    pub fn has_won(&self, team: TeamId) -> bool {
        let goal = self.board.team(team).goal();
        self.tokens_of(team).iter().all(|token| token.tile() == goal)
    }

    pub fn winner(&self) -> Option<TeamId> {
        TeamId::ALL.into_iter().find(|&team| self.has_won(team))
    }

    /// Checks that tile occupants and token positions agree, and that only goals
    /// hold more than one token.
    pub fn is_consistent(&self) -> bool {
        let tokens_agree = self
            .tokens()
            .all(|token| self.board.tile(token.tile()).occupants().contains(&token.id()));

        let tiles_agree = self.board.tiles().iter().all(|tile| {
            let stacked_ok = tile.occupants().len() <= 1
                || tile.occupants().iter().all(|o| self.board.team(o.team).goal() == tile.id());
            stacked_ok && tile.occupants().iter().all(|&o| self.tile_of(o) == tile.id())
        });

        tokens_agree && tiles_agree
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
