//! Tests for the terminal session flow.

use crossterm::event::KeyCode;
use tictac::{App, Control, Cue, GameConfig, GameMode, Screen};
use tictac_engine::{Outcome, Player, Position, select_move};

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

/// Runs every pending computer search synchronously.
fn run_computer(app: &mut App) {
    while let Some(request) = app.take_search_request() {
        let result = select_move(&request.board, request.side);
        app.complete_search(request.board, result);
    }
}

fn robot_game(name: &str) -> App {
    let config =
        GameConfig::default().with_overrides(Some(GameMode::Robot), Some(name.to_string()), None);
    App::new(config)
}

#[test]
fn test_setup_flow_for_two_humans() {
    let mut app = App::new(GameConfig::default());
    assert_eq!(
        app.screen(),
        &Screen::ModeSelect {
            selected: GameMode::Robot
        }
    );

    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.mode(), GameMode::Human);
    assert_eq!(app.screen(), &Screen::NameEntry { field: Player::X });

    type_text(&mut app, "Ada");
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.message(), Some("Please enter names for both players."));

    app.handle_key(KeyCode::Tab);
    type_text(&mut app, "Grace");
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.screen(), &Screen::Playing);
    let roster = app.roster().unwrap();
    assert_eq!(roster.name(Player::X), "Ada");
    assert_eq!(roster.name(Player::O), "Grace");
}

#[test]
fn test_x_name_is_required() {
    let mut app = App::new(GameConfig::default());
    app.handle_key(KeyCode::Enter);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.message(), Some("Please enter the name for Player X."));
    assert_eq!(app.screen(), &Screen::NameEntry { field: Player::X });
}

#[test]
fn test_computer_replies_after_human_move() {
    let mut app = robot_game("Ada");
    assert_eq!(app.screen(), &Screen::Playing);
    assert_eq!(app.roster().unwrap().name(Player::O), "Robot");

    // No search before X has moved.
    assert!(app.take_search_request().is_none());

    app.handle_key(KeyCode::Char('5'));
    let request = app.take_search_request().expect("computer to move");
    assert_eq!(request.side, Player::O);
    assert!(app.is_thinking());
    assert_eq!(app.status_line(), "Robot is thinking...");

    // Human input is gated while the computer thinks.
    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.game().history().len(), 1);

    let result = select_move(&request.board, request.side);
    app.complete_search(request.board, result);

    assert!(!app.is_thinking());
    assert_eq!(app.game().history(), &[Position::Center, Position::TopLeft]);
    assert_eq!(app.game().to_move(), Player::X);
}

#[test]
fn test_stale_search_is_discarded_after_reset() {
    let mut app = robot_game("Ada");
    app.handle_key(KeyCode::Char('5'));
    let request = app.take_search_request().unwrap();

    app.handle_key(KeyCode::Char('r'));
    let result = select_move(&request.board, request.side);
    app.complete_search(request.board, result);

    assert!(app.game().history().is_empty());
    assert!(!app.is_thinking());
}

#[test]
fn test_reset_during_search_hands_the_board_back() {
    let mut app = robot_game("Ada");
    app.handle_key(KeyCode::Char('5'));
    let request = app.take_search_request().unwrap();
    assert!(app.is_thinking());

    app.handle_key(KeyCode::Char('r'));
    assert!(!app.is_thinking());
    assert_eq!(app.status_line(), "Ada's turn (X)");

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.message(), None);
    assert_eq!(app.game().history(), &[Position::TopLeft]);

    // The old answer arrives after the new game has moved on.
    let result = select_move(&request.board, request.side);
    app.complete_search(request.board, result);
    assert_eq!(app.game().history(), &[Position::TopLeft]);
}

#[test]
fn test_switching_to_human_during_search_frees_o() {
    let mut app = robot_game("Ada");
    app.handle_key(KeyCode::Char('5'));
    let request = app.take_search_request().unwrap();

    app.handle_key(KeyCode::Char('m'));
    assert_eq!(app.mode(), GameMode::Human);
    assert!(!app.is_thinking());

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.game().history(), &[Position::Center, Position::TopLeft]);

    let result = select_move(&request.board, request.side);
    app.complete_search(request.board, result);
    assert_eq!(app.game().history().len(), 2);
}

#[test]
fn test_every_placed_mark_gives_a_cue() {
    let mut app = robot_game("Ada");
    assert_eq!(app.take_cue(), None);

    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.take_cue(), Some(Cue::Move));

    run_computer(&mut app);
    assert_eq!(app.game().history().len(), 2);
    assert_eq!(app.take_cue(), Some(Cue::Move));

    // A rejected move is silent.
    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.take_cue(), None);
}

#[test]
fn test_robot_never_loses_to_corner_play() {
    let mut app = robot_game("Ada");
    for key in ['1', '3', '7', '9', '2', '4', '6', '8', '5'] {
        app.handle_key(KeyCode::Char(key));
        run_computer(&mut app);
        if app.game().is_over() {
            break;
        }
    }

    assert!(app.game().is_over());
    assert_ne!(app.game().outcome(), Outcome::XWins);
    assert_eq!(app.take_cue(), Some(Cue::GameOver));
    assert_eq!(app.reset_label(), "Play Again");
}

#[test]
fn test_occupied_square_reports_error() {
    let config = GameConfig::default().with_overrides(
        Some(GameMode::Human),
        Some("Ada".to_string()),
        Some("Grace".to_string()),
    );
    let mut app = App::new(config);
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('5'));

    assert_eq!(app.message(), Some("Square Center is already occupied"));
    assert_eq!(app.game().to_move(), Player::O);
    assert_eq!(app.status_line(), "Grace's turn (O)");
}

#[test]
fn test_switching_to_robot_mid_game_hands_o_to_computer() {
    let config = GameConfig::default().with_overrides(
        Some(GameMode::Human),
        Some("Ada".to_string()),
        Some("Grace".to_string()),
    );
    let mut app = App::new(config);
    app.handle_key(KeyCode::Char('1'));
    assert!(app.take_search_request().is_none());

    app.handle_key(KeyCode::Char('m'));
    assert_eq!(app.mode(), GameMode::Robot);
    assert_eq!(app.roster().unwrap().name(Player::O), "Robot");
    assert!(app.take_search_request().is_some());
}

#[test]
fn test_quit() {
    let mut app = robot_game("Ada");
    assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
}
