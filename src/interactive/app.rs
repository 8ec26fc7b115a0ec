//! TUI application state and logic

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::{Outcome, Round};
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

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub round: Round,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub show_hint: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl<'a> App<'a> {
    /// Create the app with a freshly started round
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no playable words.
    pub fn new(dictionary: &'a Dictionary) -> Result<Self, DictionaryError> {
        let round = Round::start(dictionary, &mut rand::rng())?;

        Ok(Self {
            dictionary,
            round,
            input_buffer: String::new(),
            input_mode: InputMode::Guessing,
            show_hint: false,
            messages: vec![
                Message {
                    text: "Salve! Guess the five-letter Latin word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess and press Enter. TAB reveals a hint.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_alphabetic() && self.input_buffer.chars().count() < WORD_LENGTH {
            self.input_buffer.push(c);
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.round.submit(&input) {
            Ok(_) => {
                self.input_buffer.clear();

                if let Some(outcome) = self.round.outcome() {
                    self.finish_round(outcome);
                } else {
                    let remaining = self.round.guesses_remaining();
                    let label = if remaining == 1 { "guess" } else { "guesses" };
                    self.add_message(&format!("{remaining} {label} left"), MessageStyle::Info);
                }
            }
            Err(err) => {
                // Keep the buffer so the input can be corrected
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_round(&mut self, outcome: Outcome) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::RoundOver;

        match outcome {
            Outcome::Won => {
                self.stats.games_won += 1;
                let guess_count = self.round.guesses().len();
                if guess_count <= MAX_GUESSES {
                    self.stats.guess_distribution[guess_count] += 1;
                }

                let celebration = match guess_count {
                    1 => "🏆 Perfect! Got it in one!",
                    2 => "⭐ Excellent! Two guesses!",
                    3 => "💫 Great! Three guesses!",
                    4 => "✨ Good! Four guesses!",
                    5 => "👍 Solved in five!",
                    _ => "✓ Just in time!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                let answer = self.round.answer().word().text().to_string();
                self.add_message(
                    &format!("Sorry, the correct answer is {answer}."),
                    MessageStyle::Error,
                );
            }
        }

        self.add_message(
            "Press 'n' for a new round or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn new_round(&mut self) {
        match Round::start(self.dictionary, &mut rand::rng()) {
            Ok(round) => {
                self.round = round;
                self.input_buffer.clear();
                self.show_hint = false;
                self.input_mode = InputMode::Guessing;
                self.messages.clear();
                self.add_message("New round started. Guess the word!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
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
                InputMode::Guessing => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab => {
                            app.toggle_hint();
                        }
                        KeyCode::Enter => {
                            app.submit_guess();
                        }
                        KeyCode::Backspace => {
                            app.pop_letter();
                        }
                        KeyCode::Char(c) => {
                            // Letters only; 'q' stays usable for words like AQUAE
                            app.push_letter(c);
                        }
                        _ => {}
                    }
                }
                InputMode::RoundOver => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') | KeyCode::Enter => {
                            app.new_round();
                        }
                        _ => {
                            // Ignore other keys until a new round starts
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
