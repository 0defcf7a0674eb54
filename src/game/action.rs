use serde::{Deserialize, Serialize};

/// Decoded player input. Raw key handling lives in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    RollDie,
    ConfirmMove,
    SkipTurn,
    SelectNext,
    SelectPrevious,
    CancelToMenu,
}
