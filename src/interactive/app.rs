//! TUI application state and logic
//!
//! The app is a thin adapter: every gesture becomes one engine call and the
//! screen re-renders from engine state. No rule lives here.

use crate::core::{BOARD_LEN, TileId};
use crate::engine::{Game, PlayError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What the player currently has in hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    /// A rack slot (0-based)
    Rack(usize),
    /// A tile grabbed off the board, mid-move
    Board(TileId),
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Waiting for the blank's chosen letter before finishing the gesture
    WildcardLetter {
        tile: TileId,
        square: usize,
        insert: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub game: Game,
    pub cursor: usize,
    pub selection: Selection,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            cursor: BOARD_LEN / 2,
            selection: Selection::None,
            input_mode: InputMode::Normal,
            messages: vec![
                Message {
                    text: "Welcome! Pick a rack tile with 1-7, then place it with Enter."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Submit with 's' once the tiles spell a word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let next = self.cursor.saturating_add_signed(delta);
        self.cursor = next.min(BOARD_LEN - 1);
    }

    pub fn select_slot(&mut self, slot: usize) {
        if slot < self.game.rack().len() {
            self.selection = Selection::Rack(slot);
        } else {
            self.add_message(&format!("No tile in slot {}", slot + 1), MessageStyle::Error);
        }
    }

    /// Enter/Space: place the held tile, or grab the tile under the cursor
    pub fn primary_action(&mut self) {
        match self.selection {
            Selection::Rack(slot) => {
                let Some(&tile) = self.game.rack().get(slot) else {
                    self.selection = Selection::None;
                    return;
                };
                self.try_place(tile, false);
            }
            Selection::Board(tile) => self.try_place(tile, false),
            Selection::None => {
                if let Some(placement) = self.game.board().get(self.cursor) {
                    self.selection = Selection::Board(placement.tile);
                    self.add_message(
                        "Picked up the tile - move the cursor and press Enter",
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message("Pick a rack tile first (1-7)", MessageStyle::Info);
                }
            }
        }
    }

    /// 'i': insert the held rack tile at the cursor, shifting the tail right
    pub fn insert_action(&mut self) {
        let Selection::Rack(slot) = self.selection else {
            self.add_message("Pick a rack tile to insert (1-7)", MessageStyle::Info);
            return;
        };
        let Some(&tile) = self.game.rack().get(slot) else {
            self.selection = Selection::None;
            return;
        };
        self.try_place(tile, true);
    }

    fn try_place(&mut self, tile: TileId, insert: bool) {
        let square = self.cursor;
        let result = if insert {
            self.game.insert(tile, square)
        } else {
            self.game.place(tile, square)
        };

        match result {
            Ok(()) => self.selection = Selection::None,
            Err(PlayError::WildcardNeedsLetter) => {
                self.input_mode = InputMode::WildcardLetter {
                    tile,
                    square,
                    insert,
                };
                self.add_message("Choose a letter A-Z for the blank", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Finish a deferred blank placement with the chosen letter
    pub fn apply_wildcard_letter(&mut self, letter: char) {
        let InputMode::WildcardLetter {
            tile,
            square,
            insert,
        } = self.input_mode
        else {
            return;
        };

        let result = if insert {
            self.game.insert_wildcard(tile, square, letter)
        } else {
            self.game.place_wildcard(tile, square, letter)
        };

        self.input_mode = InputMode::Normal;
        match result {
            Ok(()) => self.selection = Selection::None,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Backspace: return the tile under the cursor to the rack
    pub fn pickup_under_cursor(&mut self) {
        if let Some(placement) = self.game.board().get(self.cursor) {
            self.game.remove(placement.tile);
            if self.selection == Selection::Board(placement.tile) {
                self.selection = Selection::None;
            }
        } else {
            self.add_message("Nothing to pick up here", MessageStyle::Info);
        }
    }

    pub fn submit(&mut self) {
        match self.game.commit() {
            Ok(commit) => {
                self.add_message(
                    &format!(
                        "Word \"{}\" submitted for {} points!",
                        commit.word, commit.points
                    ),
                    MessageStyle::Success,
                );
                self.selection = Selection::None;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn recall(&mut self) {
        self.game.recall();
        self.selection = Selection::None;
        self.add_message("Tiles recalled to rack", MessageStyle::Success);
    }

    pub fn exchange_rack(&mut self) {
        match self.game.new_tiles() {
            Ok(()) => {
                self.selection = Selection::None;
                self.add_message("New tiles dealt!", MessageStyle::Success);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.selection = Selection::None;
        self.add_message("Game reset!", MessageStyle::Success);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Left => app.move_cursor(-1),
                    KeyCode::Right => app.move_cursor(1),
                    KeyCode::Char(c @ '1'..='7') => {
                        app.select_slot(c as usize - '1' as usize);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => app.primary_action(),
                    KeyCode::Char('i') => app.insert_action(),
                    KeyCode::Backspace | KeyCode::Char('x') => app.pickup_under_cursor(),
                    KeyCode::Char('s') => app.submit(),
                    KeyCode::Char('r') => app.recall(),
                    KeyCode::Char('n') => app.exchange_rack(),
                    KeyCode::Char('R') => app.reset(),
                    KeyCode::Esc => app.selection = Selection::None,
                    _ => {}
                },
                InputMode::WildcardLetter { .. } => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Normal;
                        app.add_message("Cancelled blank placement", MessageStyle::Info);
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.apply_wildcard_letter(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
