//! Turn state machine: rolling, moving, captures, refusals, skipping and winning.

use fia::{
    config::GameSettings,
    error::MoveError,
    game::{Action, Capture, Game, GameState, Phase, TeamId, TileId, TokenId, TurnEvent},
};

fn no_animation() -> GameSettings {
    GameSettings { roll_animation_frames: 0 }
}

fn token(team: TeamId, index: u8) -> TokenId {
    TokenId::new(team, index)
}

/// Game starting from `state`, with Red to move the token at `selected` after rolling `roll`.
fn red_to_move(state: GameState, selected: u8, roll: u8) -> Game {
    let mut game = Game::with_state(state, no_animation());
    for _ in 0..selected {
        game.handle(Action::SelectNext);
    }
    assert_eq!(game.roll_with(roll), Ok(TurnEvent::Rolled(roll)));
    assert_eq!(game.phase(), Phase::Move);
    game
}

#[test]
fn test_initial_state() {
    let game = Game::new(no_animation());
    assert_eq!(game.phase(), Phase::Roll);
    assert_eq!(game.turn(), TeamId::Red);
    assert_eq!(game.selected(), 0);
    assert_eq!(game.die().value(), None);
    assert!(!game.is_input_locked());
    assert_eq!(game.state().tile_of(token(TeamId::Red, 0)), TileId(37));
}

#[test]
fn test_six_leaves_spawn() {
    let mut game = red_to_move(GameState::new(), 0, 6);
    let event = game.handle(Action::ConfirmMove);

    let TurnEvent::Moved(mv) = event else {
        panic!("expected a move, got {:?}", event);
    };
    assert_eq!(mv.from, TileId(37));
    assert_eq!(mv.to, TileId(5));
    assert_eq!(mv.capture, None);

    let board = game.state().board();
    assert!(board.tile(TileId(37)).is_free());
    assert_eq!(board.tile(TileId(5)).occupant(), Some(token(TeamId::Red, 0)));
    assert_eq!(game.turn(), TeamId::Green);
    assert_eq!(game.phase(), Phase::Roll);
    assert!(game.state().is_consistent());
}

#[test]
fn test_one_leaves_spawn_onto_entry() {
    let mut game = red_to_move(GameState::new(), 2, 1);
    let event = game.handle(Action::ConfirmMove);
    assert!(matches!(event, TurnEvent::Moved(mv) if mv.from == TileId(32) && mv.to == TileId(0)));
    assert_eq!(game.turn(), TeamId::Green);
}

#[test]
fn test_other_rolls_keep_token_in_spawn() {
    for roll in 2..=5 {
        let mut game = red_to_move(GameState::new(), 1, roll);
        let before = game.state().clone();
        let event = game.handle(Action::ConfirmMove);
        assert_eq!(
            event,
            TurnEvent::Rejected(MoveError::SpawnLocked { token: token(TeamId::Red, 1), roll })
        );
        assert_eq!(game.state(), &before);
        assert_eq!(game.phase(), Phase::Move);
        assert_eq!(game.turn(), TeamId::Red);
        assert_eq!(game.die().value(), Some(roll));
    }
}

#[test]
fn test_rejected_move_can_be_retried_with_another_token() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 3), TileId(10)).unwrap();
    let mut game = red_to_move(state, 0, 3);

    assert!(matches!(game.handle(Action::ConfirmMove), TurnEvent::Rejected(_)));
    assert_eq!(game.handle(Action::SelectPrevious), TurnEvent::Selected(3));
    let event = game.handle(Action::ConfirmMove);
    assert!(matches!(event, TurnEvent::Moved(mv) if mv.to == TileId(13)));
    assert_eq!(game.turn(), TeamId::Green);
}

#[test]
fn test_capture_sends_opponent_to_first_free_spawn() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(3)).unwrap();
    state.place_token(token(TeamId::Green, 0), TileId(20)).unwrap();
    state.place_token(token(TeamId::Green, 1), TileId(7)).unwrap();
    let mut game = red_to_move(state, 0, 4);

    let event = game.handle(Action::ConfirmMove);
    let TurnEvent::Moved(mv) = event else {
        panic!("expected a move, got {:?}", event);
    };
    assert_eq!(mv.to, TileId(7));
    assert_eq!(
        mv.capture,
        Some(Capture { token: token(TeamId::Green, 1), spawn: TileId(33) })
    );

    let state = game.state();
    assert_eq!(state.tile_of(token(TeamId::Green, 1)), TileId(33));
    assert_eq!(state.board().tile(TileId(33)).occupant(), Some(token(TeamId::Green, 1)));
    assert_eq!(state.board().tile(TileId(7)).occupant(), Some(token(TeamId::Red, 0)));
    assert!(state.board().tile(TileId(3)).is_free());
    assert_eq!(game.turn(), TeamId::Green);
    assert!(state.is_consistent());
}

#[test]
fn test_capture_on_spawn_exit() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Blue, 2), TileId(0)).unwrap();
    let mut game = red_to_move(state, 0, 1);

    let event = game.handle(Action::ConfirmMove);
    assert!(matches!(event, TurnEvent::Moved(mv) if mv.capture.is_some()));
    assert_eq!(game.state().tile_of(token(TeamId::Blue, 2)), TileId(44));
    assert_eq!(game.state().tile_of(token(TeamId::Red, 0)), TileId(0));
}

#[test]
fn test_capture_without_free_spawn_is_refused() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(3)).unwrap();
    state.place_token(token(TeamId::Green, 3), TileId(7)).unwrap();
    state.place_token(token(TeamId::Red, 1), TileId(41)).unwrap();
    let mut game = red_to_move(state, 0, 4);
    let before = game.state().clone();

    let event = game.handle(Action::ConfirmMove);
    assert_eq!(
        event,
        TurnEvent::Rejected(MoveError::NoFreeSpawn { token: token(TeamId::Green, 3), team: TeamId::Green })
    );
    assert_eq!(game.state(), &before);
    assert_eq!(game.turn(), TeamId::Red);
    assert_eq!(game.phase(), Phase::Move);
}

#[test]
fn test_cannot_land_on_team_mate() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(3)).unwrap();
    state.place_token(token(TeamId::Red, 1), TileId(5)).unwrap();
    let mut game = red_to_move(state, 0, 2);

    assert_eq!(
        game.handle(Action::ConfirmMove),
        TurnEvent::Rejected(MoveError::Blocked {
            token: token(TeamId::Red, 0),
            tile: TileId(5),
            occupant: token(TeamId::Red, 1),
        })
    );
    assert_eq!(game.state().tile_of(token(TeamId::Red, 0)), TileId(3));
    assert_eq!(game.turn(), TeamId::Red);
}

#[test]
fn test_passing_over_tokens_is_allowed() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(3)).unwrap();
    state.place_token(token(TeamId::Red, 1), TileId(4)).unwrap();
    state.place_token(token(TeamId::Yellow, 0), TileId(5)).unwrap();
    let mut game = red_to_move(state, 0, 3);

    let event = game.handle(Action::ConfirmMove);
    assert!(matches!(event, TurnEvent::Moved(mv) if mv.to == TileId(6) && mv.capture.is_none()));
}

#[test]
fn test_turning_into_finish_lane() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(22)).unwrap();
    let mut game = red_to_move(state, 0, 3);

    let event = game.handle(Action::ConfirmMove);
    assert!(matches!(event, TurnEvent::Moved(mv) if mv.to == TileId(25)));
}

#[test]
fn test_other_teams_pass_the_lane() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(2)).unwrap();
    state.place_token(token(TeamId::Green, 0), TileId(22)).unwrap();
    let mut game = red_to_move(state, 0, 1);
    game.handle(Action::ConfirmMove);
    assert_eq!(game.turn(), TeamId::Green);

    game.roll_with(3).unwrap();
    let event = game.handle(Action::ConfirmMove);
    assert!(matches!(event, TurnEvent::Moved(mv) if mv.to == TileId(1)));
}

#[test]
fn test_overshooting_the_goal_is_refused() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(24)).unwrap();
    let mut game = red_to_move(state, 0, 2);

    assert_eq!(
        game.handle(Action::ConfirmMove),
        TurnEvent::Rejected(MoveError::Overshoot { token: token(TeamId::Red, 0) })
    );
    assert_eq!(game.state().tile_of(token(TeamId::Red, 0)), TileId(24));
    assert_eq!(game.phase(), Phase::Move);

    let mut game = red_to_move(game.state().clone(), 0, 1);
    assert!(matches!(game.handle(Action::ConfirmMove), TurnEvent::Moved(mv) if mv.to == TileId(25)));
}

#[test]
fn test_token_on_goal_cannot_move() {
    let mut state = GameState::new();
    state.place_token(token(TeamId::Red, 0), TileId(25)).unwrap();
    for roll in 1..=6 {
        let mut game = red_to_move(state.clone(), 0, roll);
        assert!(!game.can_move(token(TeamId::Red, 0)));
        assert!(matches!(game.handle(Action::ConfirmMove), TurnEvent::Rejected(MoveError::Overshoot { .. })));
    }
}

#[test]
fn test_team_mates_stack_on_goal_and_win() {
    let mut state = GameState::new();
    for index in 1..4 {
        state.place_token(token(TeamId::Red, index), TileId(25)).unwrap();
    }
    state.place_token(token(TeamId::Red, 0), TileId(24)).unwrap();
    let mut game = red_to_move(state, 0, 1);

    assert!(matches!(game.handle(Action::ConfirmMove), TurnEvent::Moved(_)));
    assert_eq!(game.phase(), Phase::Finished(TeamId::Red));
    assert_eq!(game.winner(), Some(TeamId::Red));
    assert_eq!(game.state().board().tile(TileId(25)).occupants().len(), 4);
    assert!(game.state().is_consistent());
    assert_eq!(game.message(), "Team Red wins!");

    for action in [Action::RollDie, Action::ConfirmMove, Action::SkipTurn, Action::SelectNext] {
        assert_eq!(game.handle(action), TurnEvent::Ignored);
    }
    assert_eq!(game.roll_with(6), Ok(TurnEvent::Ignored));
}

#[test]
fn test_skip_turn_discards_roll() {
    let mut game = red_to_move(GameState::new(), 2, 3);
    assert_eq!(
        game.handle(Action::SkipTurn),
        TurnEvent::Skipped { from: TeamId::Red, to: TeamId::Green }
    );
    assert_eq!(game.phase(), Phase::Roll);
    assert_eq!(game.turn(), TeamId::Green);
    assert_eq!(game.selected(), 0);
    assert_eq!(game.die().value(), None);
}

#[test]
fn test_turn_order_wraps_around() {
    let mut game = Game::new(no_animation());
    for expected in [TeamId::Red, TeamId::Green, TeamId::Blue, TeamId::Yellow, TeamId::Red] {
        assert_eq!(game.turn(), expected);
        game.roll_with(2).unwrap();
        game.handle(Action::SkipTurn);
    }
}

#[test]
fn test_inputs_outside_their_phase_are_ignored() {
    let mut game = Game::new(no_animation());
    assert_eq!(game.handle(Action::ConfirmMove), TurnEvent::Ignored);
    assert_eq!(game.handle(Action::SkipTurn), TurnEvent::Ignored);
    assert_eq!(game.handle(Action::CancelToMenu), TurnEvent::Ignored);

    game.roll_with(4).unwrap();
    assert_eq!(game.handle(Action::RollDie), TurnEvent::Ignored);
    assert_eq!(game.roll_with(6), Ok(TurnEvent::Ignored));
    assert_eq!(game.die().value(), Some(4));
}

#[test]
fn test_roll_action_uses_random_die() {
    let mut game = Game::new(no_animation());
    let event = game.handle(Action::RollDie);
    let TurnEvent::Rolled(value) = event else {
        panic!("expected a roll, got {:?}", event);
    };
    assert!((1..=6).contains(&value));
    assert_eq!(game.die().value(), Some(value));
    assert_eq!(game.phase(), Phase::Move);
}

#[test]
fn test_invalid_fixed_roll_is_an_error() {
    let mut game = Game::new(no_animation());
    assert!(game.roll_with(7).is_err());
    assert_eq!(game.phase(), Phase::Roll);
}

#[test]
fn test_selection_cycles() {
    let mut game = Game::new(no_animation());
    assert_eq!(game.handle(Action::SelectPrevious), TurnEvent::Selected(3));
    assert_eq!(game.handle(Action::SelectNext), TurnEvent::Selected(0));
    for expected in [1, 2, 3, 0] {
        assert_eq!(game.handle(Action::SelectNext), TurnEvent::Selected(expected));
    }
    game.handle(Action::SelectNext);
    game.roll_with(5).unwrap();
    assert_eq!(game.selected(), 1);
    assert_eq!(game.selected_token(), token(TeamId::Red, 1));
}

#[test]
fn test_roll_animation_locks_input() {
    let mut game = Game::new(GameSettings { roll_animation_frames: 3 });
    game.roll_with(4).unwrap();
    assert!(game.is_input_locked());
    assert_eq!(game.animation_remaining(), Some(3));
    assert_eq!(game.handle(Action::SelectNext), TurnEvent::Ignored);
    assert_eq!(game.handle(Action::SkipTurn), TurnEvent::Ignored);

    game.tick();
    game.tick();
    assert!(game.is_input_locked());
    assert_eq!(game.handle(Action::ConfirmMove), TurnEvent::Ignored);

    game.tick();
    assert!(!game.is_input_locked());
    assert_eq!(game.animation_remaining(), None);
    assert_eq!(game.handle(Action::SelectNext), TurnEvent::Selected(1));
}

#[test]
fn test_can_move_reflects_roll() {
    let mut game = red_to_move(GameState::new(), 0, 3);
    assert!(TokenId::all().all(|t| !game.can_move(t)));
    game.handle(Action::SkipTurn);

    game.roll_with(6).unwrap();
    for t in TokenId::all() {
        assert_eq!(game.can_move(t), t.team == TeamId::Green, "{}", t);
    }
}

#[test]
fn test_hud_follows_phase() {
    let mut game = Game::new(GameSettings { roll_animation_frames: 2 });
    let hud = game.hud();
    assert_eq!(hud.die_face, None);
    assert_eq!(hud.message, "Team Red's turn. Roll the die.");

    game.roll_with(5).unwrap();
    let hud = game.hud();
    assert_eq!(hud.rolling, Some(2));
    assert!(hud.die_face.is_some());

    game.tick();
    game.tick();
    let hud = game.hud();
    assert_eq!(hud.rolling, None);
    assert_eq!(hud.die_face, Some(5));
    assert_eq!(hud.phase, Phase::Move);
    assert_eq!(hud.message, "Team Red's turn. Move a piece.");
}

#[test]
fn test_views_cover_board() {
    let game = Game::new(no_animation());
    assert_eq!(game.tile_views().count(), 48);
    assert_eq!(game.tile_views().filter(|t| !t.occupants.is_empty()).count(), 16);

    let tokens = game.token_views().collect::<Vec<_>>();
    assert_eq!(tokens.len(), 16);
    assert_eq!(tokens.iter().filter(|t| t.selected).count(), 1);
    assert!(tokens.iter().all(|t| !t.movable));
}
