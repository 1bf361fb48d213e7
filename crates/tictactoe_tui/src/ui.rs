//! Stateless UI rendering for tic-tac-toe.

use crate::app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Cell, GameSession, Position};

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::NameEntry => draw_name_entry(frame, chunks[1], app),
        Screen::Playing => draw_board(frame, chunks[1], app.session(), app.cursor()),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

/// Key hints for the current screen.
pub fn help_text(app: &App) -> &'static str {
    match app.screen() {
        Screen::NameEntry => "Type names | Tab: Switch field | Enter: Start | Esc: Quit",
        Screen::Playing if app.session().is_game_over() => "R: Play again | Q: Quit",
        Screen::Playing => "Arrows + Enter or 1-9: Place mark | Q: Quit",
    }
}

fn draw_name_entry(frame: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(form);

    for (field, title) in ["Player 1 (X)", "Player 2 (O)"].into_iter().enumerate() {
        let style = if app.focus() == field {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(app.names()[field].as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(input, rows[field]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let highlight = session.winning_triple();
    let cursor = (!session.is_game_over()).then_some(cursor);

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
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let index = row * 3 + col;
            let winning = highlight.is_some_and(|triple| triple.contains(&index));
            let cell = session.board().get(index).unwrap_or_default();
            let selected = cursor.is_some_and(|c| c.index() == index);
            draw_cell(frame, cols[col * 2], cell, selected, winning);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool, winning: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::X => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::O => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn marks_on(app: &App, color: Color) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.bg == color && matches!(cell.symbol(), "X" | "O"))
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_name_entry_renders_fields() {
        let app = App::new(TuiConfig::default(), Some("Ada".into()), None);
        let screen = rendered(&app);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains("Player 1 (X)"));
        assert!(screen.contains("Ada"));
    }

    #[test]
    fn test_board_renders_marks_and_status() {
        let mut app = App::new(TuiConfig::default(), Some("Ada".into()), Some("Bob".into()));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('5'));

        let screen = rendered(&app);
        assert!(screen.contains(" X "));
        assert!(screen.contains("Bob's turn"));
    }

    #[test]
    fn test_help_offers_restart_after_game_over() {
        let mut app = App::new(TuiConfig::default(), None, None);
        press(&mut app, KeyCode::Enter);
        assert!(!help_text(&app).contains("Play again"));
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(help_text(&app).contains("Play again"));
    }

    #[test]
    fn test_winning_triple_highlighted() {
        let mut app = App::new(TuiConfig::default(), Some("Ada".into()), Some("Bob".into()));
        press(&mut app, KeyCode::Enter);
        for key in ['1', '4', '2', '5'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(marks_on(&app, Color::Green).is_empty());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session().winning_triple(), Some([0, 1, 2]));
        assert_eq!(marks_on(&app, Color::Green), vec!["X", "X", "X"]);
    }
}
