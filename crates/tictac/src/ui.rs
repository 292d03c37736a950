//! Stateless UI rendering.

use crate::app::{App, Screen};
use crate::mode::GameMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictac_engine::{Player, Position, Square, WinningLine};

/// Renders the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::ModeSelect { .. } => "↑/↓ choose  Enter confirm  q quit".to_string(),
        Screen::NameEntry { .. } => "type a name  Tab switch  Enter start  Esc back".to_string(),
        Screen::Playing => format!(
            "arrows/1-9 move  Enter place  m switch mode  r {}  q quit",
            app.reset_label()
        ),
    };

    match app.screen() {
        Screen::ModeSelect { selected } => draw_mode_select(frame, chunks[1], *selected),
        Screen::NameEntry { field } => draw_name_entry(frame, chunks[1], app, *field),
        Screen::Playing => draw_playing(frame, chunks[1], app),
    }

    let (status, color) = match app.message() {
        Some(message) => (message.to_string(), Color::Red),
        None => (app.status_line(), Color::Yellow),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_mode_select(frame: &mut Frame, area: Rect, selected: GameMode) {
    let mut lines = vec![Line::from("Select Game Mode"), Line::from("")];
    for mode in GameMode::iter() {
        let (marker, style) = if mode == selected {
            ("(•)", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("( )", Style::default())
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, mode.name()),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_name_entry(frame: &mut Frame, area: Rect, app: &App, field: Player) {
    let mut lines = vec![Line::from(app.mode().name()), Line::from("")];

    let mut players = vec![Player::X];
    if !app.mode().computer_plays_o() {
        players.push(Player::O);
    }

    for player in players {
        let active = player == field;
        let cursor = if active { "_" } else { "" };
        let style = if active {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("Enter Player {} Name: {}{}", player, app.entered_name(player), cursor),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_playing(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(11)])
        .split(area);

    if let Some(roster) = app.roster() {
        let header = Paragraph::new(vec![
            Line::from(format!("Player X: {}", roster.name(Player::X))),
            Line::from(format!("Player O: {}", roster.name(Player::O))),
            Line::from(Span::styled(
                app.mode().name(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);
    }

    draw_board(frame, chunks[1], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 29, 11);
    let strike = app.game().evaluation().winning_line;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, strike, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(29)).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, strike: Option<WinningLine>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for column in 0..3 {
        if let Some(pos) = Position::from_row_column(row, column) {
            draw_cell(frame, cols[column * 2], app, strike, pos);
        }
        if column < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[column * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, strike: Option<WinningLine>, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_strike = strike.is_some_and(|line| line.contains(pos.to_index()));
    let style = if on_strike {
        base_style.bg(Color::Green).add_modifier(Modifier::CROSSED_OUT)
    } else if pos == app.cursor() && !app.game().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
