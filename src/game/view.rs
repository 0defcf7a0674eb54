//! Read-only snapshot types for the frontend. Board coordinates have their origin
//! at the top-left of the board with y growing downwards.

use crate::game::{Color, Game, Occupants, Phase, TeamId, TileId, TileKind, TokenId};

/// Horizontal distance between tokens sharing a goal.
const STACK_OFFSET: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileView {
    pub id: TileId,
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    pub occupants: Occupants,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenView {
    pub id: TokenId,
    pub tile: TileId,
    /// Center of the token.
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub selected: bool,
    pub movable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub phase: Phase,
    pub team: TeamId,
    pub selected: u8,
    /// Face to draw, `None` while waiting for a roll.
    pub die_face: Option<u8>,
    pub rolling: Option<u32>,
    pub message: String,
}

impl Game {
    pub fn tile_views(&self) -> impl Iterator<Item = TileView> + '_ {
        self.state().board().tiles().iter().map(|tile| {
            let (x, y) = tile.position();
            TileView {
                id: tile.id(),
                kind: tile.kind(),
                x,
                y,
                size: tile.size(),
                color: tile.color(),
                occupants: *tile.occupants(),
            }
        })
    }

    pub fn token_views(&self) -> impl Iterator<Item = TokenView> + '_ {
        let board = self.state().board();
        self.state().tokens().map(move |token| {
            let tile = board.tile(token.tile());
            let (x, y) = tile.position();
            let stack = tile.occupants();
            let slot = stack.iter().position(|&o| o == token.id()).unwrap_or(0) as f32;
            let spread = (slot - (stack.len().max(1) - 1) as f32 / 2.0) * STACK_OFFSET;
            TokenView {
                id: token.id(),
                tile: token.tile(),
                x: x + tile.size() / 2.0 + spread,
                y: y + tile.size() / 2.0,
                color: token.team().color(),
                selected: self.winner().is_none() && token.id() == self.selected_token(),
                movable: self.can_move(token.id()),
            }
        })
    }

    pub fn hud(&self) -> Hud {
        let die_face = match (self.animation_remaining(), self.phase()) {
            (Some(remaining), _) => Some(self.die().animation_face(remaining)),
            (None, Phase::Move) => self.die().value(),
            _ => None,
        };
        Hud {
            phase: self.phase(),
            team: self.turn(),
            selected: self.selected(),
            die_face,
            rolling: self.animation_remaining(),
            message: self.message(),
        }
    }
}
