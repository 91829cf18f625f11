//! The screen transition table, checked exhaustively.

use tui_flappy::core::GameState;
use tui_flappy::types::{Flow, GameAction, Screen};

const ALL: [GameAction; 4] = [
    GameAction::Flap,
    GameAction::Restart,
    GameAction::Home,
    GameAction::Quit,
];

fn on_screen(screen: Screen) -> GameState {
    let mut game = GameState::new(5, 0);
    match screen {
        Screen::Home => {}
        Screen::Playing => {
            game.apply_action(GameAction::Flap, 0);
        }
        Screen::Over => {
            game.apply_action(GameAction::Flap, 0);
            game.bird_mut().y = 570.0;
            game.tick(16);
        }
    }
    assert_eq!(game.screen(), screen);
    game
}

fn expected(screen: Screen, action: GameAction) -> (Flow, Screen) {
    match (screen, action) {
        (_, GameAction::Quit) => (Flow::Quit, screen),
        (Screen::Home, GameAction::Flap) => (Flow::Continue, Screen::Playing),
        (Screen::Over, GameAction::Restart) => (Flow::Continue, Screen::Playing),
        (Screen::Over, GameAction::Home) => (Flow::Continue, Screen::Home),
        _ => (Flow::Continue, screen),
    }
}

#[test]
fn transition_table_is_exhaustive() {
    for screen in [Screen::Home, Screen::Playing, Screen::Over] {
        for action in ALL {
            let mut game = on_screen(screen);
            let flow = game.apply_action(action, 100);
            assert_eq!(
                (flow, game.screen()),
                expected(screen, action),
                "{screen:?} + {action:?}"
            );
        }
    }
}

#[test]
fn ignored_actions_leave_state_untouched() {
    for (screen, action) in [
        (Screen::Home, GameAction::Restart),
        (Screen::Home, GameAction::Home),
        (Screen::Playing, GameAction::Restart),
        (Screen::Playing, GameAction::Home),
        (Screen::Over, GameAction::Flap),
    ] {
        let mut game = on_screen(screen);
        let before = game.snapshot();
        let velocity = game.bird().velocity;
        game.apply_action(action, 100);
        assert_eq!(game.snapshot(), before, "{screen:?} + {action:?}");
        assert_eq!(game.bird().velocity, velocity);
    }
}

#[test]
fn quit_does_not_change_state() {
    for screen in [Screen::Home, Screen::Playing, Screen::Over] {
        let mut game = on_screen(screen);
        let before = game.snapshot();
        assert_eq!(game.apply_action(GameAction::Quit, 100), Flow::Quit);
        assert_eq!(game.snapshot(), before);
    }
}

#[test]
fn sessions_are_counted() {
    let mut game = on_screen(Screen::Over);
    assert_eq!(game.session_id(), 0);
    game.apply_action(GameAction::Restart, 100);
    game.bird_mut().y = 570.0;
    game.tick(116);
    game.apply_action(GameAction::Home, 200);
    assert_eq!(game.session_id(), 2);
    assert_eq!(game.screen(), Screen::Home);
}
