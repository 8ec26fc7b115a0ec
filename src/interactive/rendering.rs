//! TUI rendering with ratatui
//!
//! Draws the guess grid, hint and round panels, and the session status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Evaluation, LetterStatus, MAX_GUESSES, WORD_LENGTH};
use crate::game::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Guess grid
            Constraint::Percentage(55), // Hint and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🏛 VERBULA - Guess the Latin Word")
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

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let evaluations = app.round.evaluations();
    let typed = app.input_buffer.to_uppercase();

    // Always show all rows so the remaining attempts stay visible
    let mut lines = Vec::with_capacity(MAX_GUESSES);
    for row in 0..MAX_GUESSES {
        if let Some(evaluation) = evaluations.get(row) {
            lines.push(scored_row(evaluation));
        } else if row == evaluations.len() && !app.round.is_over() {
            lines.push(typed_row(&typed));
        } else {
            lines.push(empty_row());
        }
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn scored_row(evaluation: &Evaluation) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for score in evaluation.scores() {
        let style = match score.status {
            LetterStatus::Correct => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Misplaced => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            LetterStatus::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", score.letter), style));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn typed_row(typed: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    let mut letters = typed.chars();
    for _ in 0..WORD_LENGTH {
        let cell = match letters.next() {
            Some(letter) => Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(cell);
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn empty_row() -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for _ in 0..WORD_LENGTH {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Hint or round summary
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    if app.round.is_over() {
        render_round_summary(f, app, chunks[0]);
    } else {
        render_hint(f, app, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.show_hint {
        let answer = app.round.answer();
        vec![
            Line::from(vec![
                Span::raw("💡 "),
                Span::styled(
                    answer.meaning(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Part of speech: {}", answer.part())),
        ]
    } else {
        vec![Line::from("Press TAB to reveal a hint.")]
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Hint ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_round_summary(f: &mut Frame, app: &App, area: Rect) {
    let answer = app.round.answer();
    let guess_count = app.round.guesses().len();

    let (headline, color) = if app.round.outcome() == Some(Outcome::Won) {
        let label = if guess_count == 1 { "guess" } else { "guesses" };
        (
            format!("Congratulations! Got it in {guess_count} {label}."),
            Color::Green,
        )
    } else {
        (
            format!("Sorry, the correct answer is {}.", answer.word()),
            Color::Red,
        )
    };

    let mut content = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                answer.word().text(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", answer.original())),
        ]),
        Line::from(format!(
            "means \"{}\" ({})",
            answer.meaning(),
            answer.part()
        )),
    ];

    if !answer.pronunciation().is_empty() {
        content.push(Line::from(format!(
            "Pronounced: {}",
            answer.pronunciation()
        )));
    }

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Round Over ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Press 'n' for a new round or 'q' to quit ",
            String::new(),
            if app.round.outcome() == Some(Outcome::Won) {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Guessing => (
            " Type a five-letter Latin word | TAB for a hint ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let turn_text = format!("Guess: {}/{}", app.round.guesses().len(), MAX_GUESSES);
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words: {}", app.dictionary.len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "ESC: Quit | TAB: Hint | Enter: Submit",
        InputMode::RoundOver => "n: New Round | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
