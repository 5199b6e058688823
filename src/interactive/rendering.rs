//! TUI rendering with ratatui
//!
//! A grid of guess rows beside suggestion and message panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

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

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Grid
            Constraint::Percentage(50), // Info panel
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

/// One row per allowed guess: scored history, then the row being typed, then blanks
fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = app.session.config().max_guesses;
    let history = app.session.history();
    let typing_row = (app.session.state() == GameState::InProgress).then_some(history.len());

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CELL_WIDTH); WORD_LENGTH])
            .flex(ratatui::layout::Flex::Center)
            .split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let (letter, style) = if let Some((word, feedback)) = history.get(row) {
                let letter = word.char_at(col).to_ascii_uppercase() as char;
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(mark_color(feedback.mark(col)))
                    .add_modifier(Modifier::BOLD);
                (letter, style)
            } else if typing_row == Some(row) {
                let letter = app
                    .input_buffer
                    .as_bytes()
                    .get(col)
                    .map_or(' ', |b| b.to_ascii_uppercase() as char);
                (letter, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            } else {
                (' ', Style::default())
            };

            let cell = Paragraph::new(letter.to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(cell, *cell_area);
        }
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Candidate gauge
            Constraint::Percentage(50), // Suggestions
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_candidate_gauge(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidate_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary_size().max(1);
    let remaining = app.session.candidate_count();
    let eliminated_pct = (total.saturating_sub(remaining) * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct.min(100))
        .label(format!("{remaining} of {total} words remain"));

    f.render_widget(gauge, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.suggestions.is_empty() {
        vec![Line::from(Span::styled(
            "Make a guess to see possible words",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.suggestions
            .iter()
            .map(|word| {
                Line::from(vec![
                    Span::raw("  • "),
                    Span::styled(
                        word.text().to_uppercase(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Suggestions ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::GameOver => {
            let hidden = app
                .session
                .hidden_word()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            (
                " Game over | Press 'n' for new game or 'q' to quit ",
                format!("The word was {hidden}"),
                if app.session.state() == GameState::Won {
                    Color::Green
                } else {
                    Color::Red
                },
            )
        }
        InputMode::Typing => (
            " Type a guess | Enter to submit | TAB for solver | ESC to quit ",
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
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let guesses_text = format!("Guesses left: {}", app.session.guesses_remaining());
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let strategy_text = format!("Solver: {}", app.strategy.name());
    let strategy = Paragraph::new(strategy_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(strategy, chunks[2]);
}
