mod tile;
pub use tile::Color;
pub use tile::Occupants;
pub use tile::Tile;
pub use tile::TileId;
pub use tile::TileKind;

pub mod layout;

mod board;
pub use board::Board;

pub mod team;
pub use team::Team;
pub use team::TeamId;

mod token;
pub use token::Token;
pub use token::TokenId;

mod die;
pub use die::Clip;
pub use die::Die;

mod state;
pub use state::Capture;
pub use state::GameState;
pub use state::Move;

mod action;
pub use action::Action;

mod phase;
pub use phase::Phase;
pub use phase::RollAnimation;

mod turn;
pub use turn::Game;
pub use turn::TurnEvent;

mod view;
pub use view::Hud;
pub use view::TileView;
pub use view::TokenView;
