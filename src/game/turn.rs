use tracing::{debug, error, info, warn};

use crate::{
    config::GameSettings,
    error::{MoveError, SetupError},
    game::{Action, Die, GameState, Move, Phase, RollAnimation, TeamId, TokenId, team::TEAM_SIZE},
};

/// What a single input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The input does not apply in the current phase, or input is locked.
    Ignored,
    Rolled(u8),
    Selected(u8),
    Moved(Move),
    /// The selected token cannot move. Nothing changed and the same team continues.
    Rejected(MoveError),
    Skipped { from: TeamId, to: TeamId },
}

/// The turn state machine. Teams take turns in order: roll the die, then move one
/// of their tokens by the rolled value, or skip.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    state: GameState,
    die: Die,
    turn: TeamId,
    phase: Phase,
    selected: u8,
    animation: Option<RollAnimation>,
    settings: GameSettings,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_state(GameState::new(), settings)
    }

    /// Starts from an arranged position, with Red to roll.
    pub fn with_state(state: GameState, settings: GameSettings) -> Self {
        Game {
            state,
            die: Die::new(),
            turn: TeamId::Red,
            phase: Phase::Roll,
            selected: 0,
            animation: None,
            settings,
        }
    }

    pub fn handle(&mut self, action: Action) -> TurnEvent {
        if let Phase::Finished(winner) = self.phase {
            debug!(?action, %winner, "game is over, ignoring input");
            return TurnEvent::Ignored;
        }
        if self.is_input_locked() {
            debug!(?action, "input locked while the die rolls");
            return TurnEvent::Ignored;
        }

        match (self.phase, action) {
            (Phase::Roll, Action::RollDie) => {
                let value = self.die.roll();
                self.start_move_phase(value)
            }
            (_, Action::SelectNext) => self.select((self.selected + 1) % TEAM_SIZE as u8),
            (_, Action::SelectPrevious) => self.select((self.selected + TEAM_SIZE as u8 - 1) % TEAM_SIZE as u8),
            (Phase::Move, Action::SkipTurn) => self.skip_turn(),
            (Phase::Move, Action::ConfirmMove) => self.confirm_move(),
            _ => TurnEvent::Ignored,
        }
    }

    /// Rolls a fixed value, with the same effect as [`Action::RollDie`].
    pub fn roll_with(&mut self, value: u8) -> Result<TurnEvent, SetupError> {
        if self.phase != Phase::Roll || self.is_input_locked() {
            return Ok(TurnEvent::Ignored);
        }
        self.die.set(value)?;
        Ok(self.start_move_phase(value))
    }

    /// Advances the roll animation by one frame. Called once per rendered frame.
    pub fn tick(&mut self) {
        let finished = self.animation.as_mut().is_some_and(|animation| animation.tick());
        if finished {
            self.animation = None;
            debug!("roll animation finished, input unlocked");
        }
    }

    fn start_move_phase(&mut self, value: u8) -> TurnEvent {
        info!(team = %self.turn, value, "rolled the die");
        let frames = self.settings.roll_animation_frames;
        self.animation = (frames > 0).then(|| RollAnimation::new(frames));
        self.phase = Phase::Move;
        TurnEvent::Rolled(value)
    }

    fn select(&mut self, index: u8) -> TurnEvent {
        self.selected = index;
        debug!(team = %self.turn, index, "selected token");
        TurnEvent::Selected(index)
    }

    fn skip_turn(&mut self) -> TurnEvent {
        let from = self.turn;
        self.die.clear();
        self.next_turn();
        info!(%from, to = %self.turn, "skipped turn");
        TurnEvent::Skipped { from, to: self.turn }
    }

    fn confirm_move(&mut self) -> TurnEvent {
        let token = self.selected_token();
        let Some(roll) = self.die.value() else {
            return TurnEvent::Rejected(MoveError::NotRolled);
        };

        let mv = match self.state.plan_move(token, roll) {
            Ok(mv) => mv,
            Err(err @ MoveError::NoFreeSpawn { .. }) => {
                error!(%err, "capture has nowhere to go, move refused");
                return TurnEvent::Rejected(err);
            }
            Err(err) => {
                warn!(%err, "move refused");
                return TurnEvent::Rejected(err);
            }
        };

        self.state.apply(&mv);
        debug_assert!(self.state.is_consistent());

        info!(%token, from = %mv.from, to = %mv.to, "moved");
        if let Some(capture) = mv.capture {
            info!(captured = %capture.token, spawn = %capture.spawn, "captured");
        }

        if self.state.has_won(self.turn) {
            info!(winner = %self.turn, "all tokens home");
            self.phase = Phase::Finished(self.turn);
        } else {
            self.next_turn();
        }
        TurnEvent::Moved(mv)
    }

    fn next_turn(&mut self) {
        self.turn = self.turn.next();
        self.phase = Phase::Roll;
        self.selected = 0;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn die(&self) -> &Die {
        &self.die
    }

    pub fn turn(&self) -> TeamId {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> u8 {
        self.selected
    }

    pub fn selected_token(&self) -> TokenId {
        TokenId::new(self.turn, self.selected)
    }

    pub fn is_input_locked(&self) -> bool {
        self.animation.is_some()
    }

    /// Frames left in the roll animation, `None` when no animation runs.
    pub fn animation_remaining(&self) -> Option<u32> {
        self.animation.map(|animation| animation.remaining())
    }

    pub fn winner(&self) -> Option<TeamId> {
        match self.phase {
            Phase::Finished(team) => Some(team),
            _ => None,
        }
    }

    /// Whether confirming a move with `token` would succeed right now.
    pub fn can_move(&self, token: TokenId) -> bool {
        self.phase == Phase::Move
            && token.team == self.turn
            && self
                .die
                .value()
                .is_some_and(|roll| self.state.plan_move(token, roll).is_ok())
    }

    pub fn message(&self) -> String {
        match self.phase {
            Phase::Roll => format!("Team {}'s turn. Roll the die.", self.turn),
            Phase::Move => format!("Team {}'s turn. Move a piece.", self.turn),
            Phase::Finished(team) => format!("Team {} wins!", team),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
