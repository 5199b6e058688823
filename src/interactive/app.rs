//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameSession, GameState, Outcome, Statistics};
use crate::output::formatters::format_words;
use crate::solver::{Strategy, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub strategy: StrategyType,
    pub input_buffer: String,
    pub suggestions: Vec<Word>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession, strategy: StrategyType) -> Self {
        let stats = Statistics::new(session.config().max_guesses);

        Self {
            session,
            strategy,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type a 5-letter word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB asks the solver for a guess.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let result = match self.session.guess(&input) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                // Keep what was typed so it can be corrected
                self.input_buffer = input;
                return;
            }
        };

        self.stats
            .record(&result.outcome, self.session.guess_count());
        self.suggestions = result.suggestions;

        match result.outcome {
            Outcome::Continue => {
                self.add_message(
                    &format!("{} candidates remaining", result.remaining),
                    MessageStyle::Info,
                );
            }
            Outcome::Won => {
                let celebration = match self.session.guess_count() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
            Outcome::Lost { hidden } => {
                self.add_message(
                    &format!(
                        "Better luck next time, the hidden word was '{}'",
                        hidden.text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    /// Put the solver's pick into the input buffer
    pub fn solver_guess(&mut self) {
        let candidates = self.session.candidates();
        let pick = self
            .strategy
            .select_guess(&candidates, self.session.rng_mut())
            .cloned();

        match pick {
            Some(word) => {
                self.input_buffer = word.text().to_string();
                self.add_message(
                    &format!("Solver suggests {}", word.text().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            None => self.add_message("No candidates remaining!", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if let Err(e) = self.session.reset() {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        log::debug!("tui: new game started");

        self.input_buffer.clear();
        self.suggestions.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started!", MessageStyle::Info);
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

    #[must_use]
    pub fn suggestion_text(&self) -> String {
        format_words(&self.suggestions)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.solver_guess(),
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < crate::core::WORD_LENGTH && c.is_ascii_alphabetic()
                    {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.state() != GameState::InProgress
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "tui: exiting after {} games ({} won)",
        app.stats.total_games,
        app.stats.games_won
    );
    Ok(())
}
