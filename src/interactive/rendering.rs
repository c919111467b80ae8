//! TUI rendering with ratatui
//!
//! Pure draw functions over the app state.

use super::app::{App, InputMode, MessageStyle, Selection};
use crate::core::{BOARD_LEN, Bonus};
use crate::engine::WordState;
use crate::output::formatters::tile_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Board
            Constraint::Length(4), // Rack
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_rack(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SINGLE-LINE SCRABBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn bonus_style(bonus: Bonus) -> Style {
    match bonus {
        Bonus::Normal => Style::default().fg(Color::DarkGray),
        Bonus::DoubleLetter | Bonus::TripleLetter => Style::default().fg(Color::Cyan),
        Bonus::DoubleWord | Bonus::TripleWord => Style::default().fg(Color::Red),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut cells: Vec<Span> = vec![Span::raw(" ")];
    let mut marker = String::from(" ");

    for idx in 0..BOARD_LEN {
        let bonus = app.game.board().bonus(idx);
        let (text, mut style) = match app.game.board().get(idx) {
            Some(placement) => {
                let letter = tile_text(app.game.tile(placement.tile), placement.assigned);
                (
                    format!(" {letter:>2} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            }
            None => {
                let label = if bonus == Bonus::Normal { "." } else { bonus.label() };
                (format!(" {label:>2} "), bonus_style(bonus))
            }
        };
        if idx == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        cells.push(Span::styled(text, style));
        marker.push_str(if idx == app.cursor { " ▲  " } else { "    " });
    }

    let content = vec![
        Line::from(cells),
        Line::from(Span::styled(marker, Style::default().fg(Color::Yellow))),
    ];

    let board = Paragraph::new(content).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_rack(f: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (slot, &id) in app.game.rack().iter().enumerate() {
        let tile = app.game.tile(id);
        let mut style = Style::default().fg(Color::Yellow);
        if app.selection == Selection::Rack(slot) {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(
            format!(" {}:{}({}) ", slot + 1, tile.face(), tile.value()),
            style,
        ));
    }

    let hint = match app.selection {
        Selection::None => "nothing in hand",
        Selection::Rack(_) => "placing from the rack",
        Selection::Board(_) => "moving a placed tile",
    };
    let content = vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let rack = Paragraph::new(content).block(
        Block::default()
            .title(" Rack ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(rack, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
            Constraint::Percentage(40),
        ])
        .split(area);

    let word_text = match app.game.current_word() {
        WordState::Empty => "Word: ---".to_string(),
        WordState::Gapped => "Word: gap in word!".to_string(),
        WordState::Word(word) => format!("Word: {word} ({})", app.game.current_score()),
    };
    let word = Paragraph::new(word_text).alignment(Alignment::Center);
    f.render_widget(word, chunks[0]);

    let total = Paragraph::new(format!("Total: {}", app.game.total_score()))
        .alignment(Alignment::Center);
    f.render_widget(total, chunks[1]);

    let bag = Paragraph::new(format!("Bag: {}", app.game.bag_remaining()))
        .alignment(Alignment::Center);
    f.render_widget(bag, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Normal => {
            "1-7 tile | ←→ cursor | ⏎ place | i insert | ⌫ pick up | s submit | r recall | n swap | R reset | q quit"
        }
        InputMode::WildcardLetter { .. } => "Type a letter A-Z for the blank | ESC to cancel",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
