use tracing::info;

use crate::{
    config::GameSettings,
    game::{Action, Game, TurnEvent},
};

/// Top-level screens. Each screen decides what an action means for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    MainMenu,
    Playing(Box<Game>),
}

/// What handling one action did at screen level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Ignored,
    Started,
    ReturnedToMenu,
    Turn(TurnEvent),
}

impl Screen {
    pub fn handle(&mut self, action: Action, settings: GameSettings) -> ScreenEvent {
        match self {
            Screen::MainMenu => match action {
                Action::ConfirmMove => {
                    info!("starting a new game");
                    *self = Screen::Playing(Box::new(Game::new(settings)));
                    ScreenEvent::Started
                }
                _ => ScreenEvent::Ignored,
            },
            Screen::Playing(_) if action == Action::CancelToMenu => {
                info!("leaving the game for the main menu");
                *self = Screen::MainMenu;
                ScreenEvent::ReturnedToMenu
            }
            Screen::Playing(game) => ScreenEvent::Turn(game.handle(action)),
        }
    }

    /// Per-frame update.
    pub fn tick(&mut self) {
        if let Screen::Playing(game) = self {
            game.tick();
        }
    }

    pub fn game(&self) -> Option<&Game> {
        match self {
            Screen::Playing(game) => Some(game.as_ref()),
            Screen::MainMenu => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::MainMenu
    }
}
