//! Application state and the turn orchestration for one terminal session.
//!
//! The app never runs the search itself. When the computer is due to move it
//! hands out a [`SearchRequest`] snapshot, and the caller feeds the answer
//! back through [`App::complete_search`]. Answers for a board that has since
//! changed are dropped.

use crate::config::GameConfig;
use crate::input::{digit_position, move_cursor};
use crate::mode::GameMode;
use crate::roster::Roster;
use crossterm::event::KeyCode;
use tictac_engine::{Board, Game, Player, Position, SearchResult};
use tracing::{debug, info, instrument, warn};

/// Which setup step or game view is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Choosing between the two modes.
    ModeSelect {
        /// Highlighted mode.
        selected: GameMode,
    },
    /// Typing player names.
    NameEntry {
        /// Field receiving keystrokes.
        field: Player,
    },
    /// The board.
    Playing,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Audible feedback the front end may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed and the game goes on.
    Move,
    /// A game just finished.
    GameOver,
}

/// Snapshot handed to the search for the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    /// Board to search from.
    pub board: Board,
    /// Side the computer plays.
    pub side: Player,
}

/// Main application state.
pub struct App {
    config: GameConfig,
    mode: GameMode,
    screen: Screen,
    player_x_name: String,
    player_o_name: String,
    roster: Option<Roster>,
    game: Game,
    cursor: Position,
    message: Option<String>,
    thinking: bool,
    cue: Option<Cue>,
}

impl App {
    /// Creates the app, skipping setup steps the configuration already answers.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let mode = config.mode().unwrap_or_default();
        let player_x_name = config.player_x().clone().unwrap_or_default();
        let player_o_name = config.player_o().clone().unwrap_or_default();

        let mut app = Self {
            mode,
            screen: Screen::ModeSelect { selected: mode },
            player_x_name,
            player_o_name,
            roster: None,
            game: Game::new(),
            cursor: Position::Center,
            message: None,
            thinking: false,
            cue: None,
            config,
        };

        if app.config.mode().is_some() {
            app.screen = Screen::NameEntry { field: Player::X };
            if app.config.player_x().is_some() {
                app.submit_names();
            }
        }

        info!(screen = ?app.screen, mode = ?app.mode, "App initialized");
        app
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Active game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The game in play.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cursor on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Player names, once setup is complete.
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// Name typed so far for `mark`.
    pub fn entered_name(&self, mark: Player) -> &str {
        match mark {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// Last error or hint to show the user.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether a search is running for the computer's move.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Label for the reset key, which doubles as "new game" once a game ends.
    pub fn reset_label(&self) -> &'static str {
        if self.game.is_over() {
            "Play Again"
        } else {
            "Reset Game"
        }
    }

    /// One-line summary of the game for the status bar.
    pub fn status_line(&self) -> String {
        let Some(roster) = &self.roster else {
            return String::new();
        };

        if let Some(announcement) = roster.announcement(self.game.outcome()) {
            return announcement;
        }

        let to_move = self.game.to_move();
        if self.thinking {
            format!("{} is thinking...", roster.name(to_move))
        } else {
            format!("{}'s turn ({})", roster.name(to_move), to_move)
        }
    }

    /// Takes the pending audible cue, if any.
    pub fn take_cue(&mut self) -> Option<Cue> {
        self.cue.take()
    }

    fn computer_to_move(&self) -> bool {
        self.screen == Screen::Playing
            && self.mode.computer_plays_o()
            && !self.game.is_over()
            && self.game.to_move() == Player::O
    }

    /// Returns a search to run when it is the computer's turn.
    ///
    /// At most one request is outstanding at a time.
    pub fn take_search_request(&mut self) -> Option<SearchRequest> {
        if self.thinking || !self.computer_to_move() {
            return None;
        }

        self.thinking = true;
        debug!(board = %self.game.board(), "Requesting computer move");
        Some(SearchRequest {
            board: *self.game.board(),
            side: Player::O,
        })
    }

    /// Applies the result of a search started from `board`.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn complete_search(&mut self, board: Board, result: SearchResult) {
        self.thinking = false;

        if board != *self.game.board() || !self.computer_to_move() {
            debug!("Discarding stale search result");
            return;
        }

        let Some(position) = result.position() else {
            warn!("Search returned no move for an unfinished game");
            return;
        };

        info!(position = %position, score = result.score, "Computer moves");
        self.play(position);
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match self.screen.clone() {
            Screen::ModeSelect { selected } => self.handle_mode_select(selected, key),
            Screen::NameEntry { field } => self.handle_name_entry(field, key),
            Screen::Playing => self.handle_playing(key),
        }
    }

    fn handle_mode_select(&mut self, selected: GameMode, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.screen = Screen::ModeSelect {
                    selected: selected.toggled(),
                };
            }
            KeyCode::Char('1') => {
                self.screen = Screen::ModeSelect {
                    selected: GameMode::Human,
                };
            }
            KeyCode::Char('2') => {
                self.screen = Screen::ModeSelect {
                    selected: GameMode::Robot,
                };
            }
            KeyCode::Enter => {
                self.mode = selected;
                self.message = None;
                self.screen = Screen::NameEntry { field: Player::X };
                debug!(mode = ?self.mode, "Mode chosen");
            }
            _ => {}
        }
        Control::Continue
    }

    fn name_mut(&mut self, field: Player) -> &mut String {
        match field {
            Player::X => &mut self.player_x_name,
            Player::O => &mut self.player_o_name,
        }
    }

    fn handle_name_entry(&mut self, field: Player, key: KeyCode) -> Control {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::ModeSelect {
                    selected: self.mode,
                };
            }
            KeyCode::Char(c) => self.name_mut(field).push(c),
            KeyCode::Backspace => {
                self.name_mut(field).pop();
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down if !self.mode.computer_plays_o() => {
                self.screen = Screen::NameEntry {
                    field: field.opponent(),
                };
            }
            KeyCode::Enter => self.submit_names(),
            _ => {}
        }
        Control::Continue
    }

    fn submit_names(&mut self) {
        match Roster::new(
            self.mode,
            &self.player_x_name,
            &self.player_o_name,
            self.config.computer_name(),
        ) {
            Ok(roster) => {
                info!(x = roster.name(Player::X), o = roster.name(Player::O), "Starting game");
                self.roster = Some(roster);
                self.message = None;
                self.game.restart();
                self.screen = Screen::Playing;
            }
            Err(e) => {
                debug!(error = %e, "Names rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn handle_playing(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.human_move(position);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
        Control::Continue
    }

    fn human_move(&mut self, position: Position) {
        if self.thinking || self.computer_to_move() {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }
        self.play(position);
    }

    fn play(&mut self, position: Position) {
        match self.game.make_move(position) {
            Ok(evaluation) => {
                self.message = None;
                if evaluation.outcome.is_terminal() {
                    info!(outcome = ?evaluation.outcome, line = ?evaluation.winning_line, "Game over");
                    self.cue = Some(Cue::GameOver);
                } else {
                    self.cue = Some(Cue::Move);
                }
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn reset(&mut self) {
        // Any search still running is for the old board and gets discarded
        self.thinking = false;
        self.game.restart();
        self.cursor = Position::Center;
        self.message = None;
    }

    fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if !self.mode.computer_plays_o() {
            self.thinking = false;
        }
        let player_o = if self.player_o_name.trim().is_empty() {
            "Player O"
        } else {
            self.player_o_name.as_str()
        };

        match Roster::new(
            self.mode,
            &self.player_x_name,
            player_o,
            self.config.computer_name(),
        ) {
            Ok(roster) => self.roster = Some(roster),
            Err(e) => self.message = Some(e.to_string()),
        }
        info!(mode = ?self.mode, "Mode switched");
    }
}
