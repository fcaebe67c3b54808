use crossterm::event::KeyCode;
use video_poker::dealer::RoundState;
use video_poker::fairness::verify;
use video_poker::tui::app::{AppState, InputAction, Scene};
use video_poker::tui::controller::handle_key;

fn setup_play_app() -> AppState {
    let mut app = AppState::default();
    app.apply_menu();
    app.reveal_delay_ms = 0;
    app
}

fn setup_audit_app() -> AppState {
    let mut app = AppState::default();
    app.cfg_start_scene = Scene::Audit;
    app.apply_menu();
    app.reveal_delay_ms = 0;
    app
}

fn settle(app: &mut AppState) {
    for _ in 0..10 {
        app.on_tick();
    }
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Play));
}

#[test]
fn menu_adjusts_reveal_delay() {
    let mut app = AppState::default();
    let before = app.cfg_reveal_delay_ms;
    let _ = app.handle_input(InputAction::MenuInc);
    assert!(app.cfg_reveal_delay_ms > before);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.reveal_delay_ms, app.cfg_reveal_delay_ms);
}

#[test]
fn help_toggles_outside_menu() {
    let mut app = setup_play_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
}

#[test]
fn play_round_deal_hold_draw() {
    let mut app = setup_play_app();
    assert!(app.handle_input(InputAction::DealOrDraw));
    assert_eq!(app.round_state(), Some(RoundState::Dealt));
    settle(&mut app);
    assert!((0..5).all(|i| app.card_visible(i)));
    assert!(app.revealed_seed().is_none());
    assert!(app.result().is_none());

    let dealt = *app.dealer.as_ref().unwrap().hand().unwrap();
    assert!(app.handle_input(InputAction::ToggleHold(0)));
    assert!(app.handle_input(InputAction::ToggleHold(4)));
    assert!(app.handle_input(InputAction::DealOrDraw));
    assert_eq!(app.round_state(), Some(RoundState::Replaced));
    assert!(app.revealing());
    assert!(app.revealed_seed().is_none());

    settle(&mut app);
    let dealer = app.dealer.as_ref().unwrap();
    let hand = dealer.hand().unwrap();
    assert_eq!(hand.cards()[0], dealt.cards()[0]);
    assert_eq!(hand.cards()[4], dealt.cards()[4]);
    assert!(app.result().is_some());
    let seed = app.revealed_seed().unwrap();
    assert!(verify(seed, dealer.commitment()));
}

#[test]
fn next_deal_starts_a_new_round() {
    let mut app = setup_play_app();
    let _ = app.handle_input(InputAction::DealOrDraw);
    settle(&mut app);
    let first = *app.dealer.as_ref().unwrap().commitment();
    let _ = app.handle_input(InputAction::DealOrDraw);
    settle(&mut app);
    let _ = app.handle_input(InputAction::DealOrDraw);
    assert_eq!(app.round_state(), Some(RoundState::Dealt));
    assert_ne!(*app.dealer.as_ref().unwrap().commitment(), first);
}

#[test]
fn hold_keys_map_to_positions() {
    let mut app = setup_play_app();
    let _ = handle_key(&mut app, KeyCode::Char(' '));
    settle(&mut app);
    let _ = handle_key(&mut app, KeyCode::Char('3'));
    assert!(app.dealer.as_ref().unwrap().held().is_held(2));
    let _ = handle_key(&mut app, KeyCode::Char('3'));
    assert!(!app.dealer.as_ref().unwrap().held().is_held(2));
}

#[test]
fn audit_seed_entry_replays_a_round() {
    let mut app = setup_audit_app();
    assert!(matches!(app.scene, Scene::Audit));
    let _ = handle_key(&mut app, KeyCode::Char('s'));
    assert!(app.seed_entry_active());
    for c in "abc1".chars() {
        let _ = handle_key(&mut app, KeyCode::Char(c));
    }
    let _ = handle_key(&mut app, KeyCode::Backspace);
    assert_eq!(app.seed_entry_text(), Some("abc"));
    let _ = handle_key(&mut app, KeyCode::Enter);
    assert!(!app.seed_entry_active());
    assert_eq!(app.round_state(), Some(RoundState::Dealt));
    assert!(!app.revealing());

    let _ = handle_key(&mut app, KeyCode::Enter);
    assert!(app.round_complete());
    assert_eq!(app.revealed_seed(), Some("abc"));
}

#[test]
fn seed_entry_cancel_keeps_state() {
    let mut app = setup_audit_app();
    let _ = app.handle_input(InputAction::SeedOpen);
    let _ = app.handle_input(InputAction::SeedChar('x'));
    let _ = app.handle_input(InputAction::SeedCancel);
    assert!(!app.seed_entry_active());
    assert!(app.dealer.is_none());
}

#[test]
fn seed_entry_only_in_audit() {
    let mut app = setup_play_app();
    assert!(!app.handle_input(InputAction::SeedOpen));
    assert!(!app.seed_entry_active());
}

#[test]
fn switching_mode_drops_the_round() {
    let mut app = setup_play_app();
    let _ = app.handle_input(InputAction::DealOrDraw);
    settle(&mut app);
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(matches!(app.scene, Scene::Menu));
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Audit));
    assert!(app.dealer.is_none());
}

#[test]
fn quit_only_from_menu() {
    let mut app = setup_play_app();
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    let _ = handle_key(&mut app, KeyCode::Char('m'));
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
