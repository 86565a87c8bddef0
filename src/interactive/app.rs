//! TUI application state and logic
//!
//! Owns the board and the gesture controller, and maps terminal events onto
//! them: left-button press/drag/release drive the token state machine, keys
//! drive the mode toggle, reset, and filter requests.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use super::rendering;
use crate::board::Board;
use crate::core::Point;
use crate::filter::{extract_constraints, filter_words};
use crate::interaction::{AssignmentMode, InteractionController};
use crate::wordlists::{WORDS, loader};

/// Application state
pub struct App {
    pub board: Board,
    pub controller: InteractionController,
    pub results: Option<Vec<String>>,
    pub messages: Vec<Message>,
    pub wordlist: Option<PathBuf>,
    pub should_quit: bool,
    last_pointer: Option<Point>,
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

impl App {
    #[must_use]
    pub fn new(wordlist: Option<PathBuf>) -> Self {
        Self {
            board: Board::new(),
            controller: InteractionController::new(),
            results: None,
            messages: vec![
                Message {
                    text: "Drag letters onto the slots; click a letter in place to exclude it."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "m: toggle correct/present | Enter: filter | r: reset | q: quit"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            wordlist,
            should_quit: false,
            last_pointer: None,
        }
    }

    /// Flip the assignment mode for subsequent drops
    pub fn toggle_mode(&mut self) {
        self.controller.toggle_mode();
        let mode = match self.controller.mode() {
            AssignmentMode::Correct => "CORRECT (letter occupies the slot)",
            AssignmentMode::Present => "PRESENT (letter in word, not this slot)",
        };
        self.add_message(&format!("Drop mode: {mode}"), MessageStyle::Info);
    }

    /// Tear down all tokens and piles and rerun board setup
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.controller.reset();
        self.results = None;
        self.add_message("Board cleared.", MessageStyle::Info);
    }

    /// Load the word list fresh and filter it against the board's marks.
    ///
    /// A missing or unreadable word list degrades to an empty result with an
    /// error message; the interaction loop never dies over it.
    pub fn run_filter(&mut self) {
        let words = match &self.wordlist {
            Some(path) => match loader::load_from_file(path) {
                Ok(words) => words,
                Err(e) => {
                    self.add_message(
                        &format!("Cannot read {}: {e}", path.display()),
                        MessageStyle::Error,
                    );
                    self.results = Some(Vec::new());
                    return;
                }
            },
            None => loader::words_from_slice(WORDS),
        };

        let constraints = extract_constraints(&self.board);
        let matches: Vec<String> = filter_words(&words, &constraints)
            .iter()
            .map(|word| word.text().to_string())
            .collect();

        let count = matches.len();
        if count == 0 {
            self.add_message("No candidates match.", MessageStyle::Error);
        } else {
            self.add_message(&format!("{count} candidates match."), MessageStyle::Success);
        }
        self.results = Some(matches);
    }

    /// Route a mouse event into the gesture controller
    pub fn handle_mouse(&mut self, mouse: MouseEvent, board_area: Rect) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(point) =
                    rendering::cell_to_board(board_area, mouse.column, mouse.row)
                {
                    self.last_pointer = Some(point);
                    self.controller.press(&mut self.board, point);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let point =
                    rendering::cell_to_board_clamped(board_area, mouse.column, mouse.row);
                if let Some(last) = self.last_pointer {
                    self.controller
                        .motion(&mut self.board, point.x - last.x, point.y - last.y);
                }
                self.last_pointer = Some(point);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.controller.release(&mut self.board);
                self.last_pointer = None;
            }
            _ => {}
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

    /// Count shown in the status bar
    #[must_use]
    pub fn result_count(&self) -> Option<usize> {
        self.results.as_ref().map(Vec::len)
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
        terminal.draw(|f| rendering::ui(f, &app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('m') => {
                        app.toggle_mode();
                    }
                    KeyCode::Char('r') => {
                        app.reset_board();
                    }
                    KeyCode::Char('f') | KeyCode::Enter => {
                        app.run_filter();
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let full = Rect::new(0, 0, size.width, size.height);
                let board_area = rendering::board_inner(full);
                app.handle_mouse(mouse, board_area);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_with_no_marks_returns_full_embedded_list() {
        let mut app = App::new(None);
        app.run_filter();

        let results = app.results.as_ref().unwrap();
        assert_eq!(results.len(), WORDS.len());
    }

    #[test]
    fn filter_with_missing_wordlist_degrades_to_empty() {
        let mut app = App::new(Some(PathBuf::from("no/such/wordfile.txt")));
        app.run_filter();

        assert_eq!(app.results.as_deref(), Some(&[] as &[String]));
        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Error))
        );
    }

    #[test]
    fn reset_clears_results_and_board() {
        let mut app = App::new(None);
        app.run_filter();
        assert!(app.results.is_some());

        app.reset_board();
        assert!(app.results.is_none());
        assert_eq!(app.board.tokens().count(), 26);
    }

    #[test]
    fn toggle_mode_reports_new_mode() {
        let mut app = App::new(None);
        assert_eq!(app.controller.mode(), AssignmentMode::Correct);

        app.toggle_mode();
        assert_eq!(app.controller.mode(), AssignmentMode::Present);
        assert!(app.messages.iter().any(|m| m.text.contains("PRESENT")));
    }
}
