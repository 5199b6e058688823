//! Console game mode
//!
//! Line-based game loop: the player types guesses, the session answers with
//! coloured tiles and a sample of the words still possible.

use crate::game::{GameSession, GameState, Outcome, Statistics};
use crate::output::formatters::{colorize_guess, format_words};
use crate::solver::Strategy;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

enum Command<'a> {
    Quit,
    NewGame,
    Hint,
    Auto,
    Guess(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    match input {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "hint" | "h" => Command::Hint,
        "auto" | "a" => Command::Auto,
        guess => Command::Guess(guess),
    }
}

/// Run the console game until the player quits or input ends
///
/// Reads from `input` and writes to `output` so the loop can be driven from
/// tests as well as a terminal.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// game cannot be started.
pub fn run_console<R, S, I, O>(
    session: &mut GameSession<R>,
    strategy: &S,
    input: &mut I,
    output: &mut O,
) -> Result<Statistics>
where
    R: Rng,
    S: Strategy,
    I: BufRead,
    O: Write,
{
    let mut stats = Statistics::new(session.config().max_guesses);

    print_banner(session, output)?;

    loop {
        let prompt = format!("Guess {}/{}", session.guess_count() + 1, session.config().max_guesses);
        let Some(line) = read_line(input, output, &prompt)? else {
            break;
        };

        let guess = match parse_command(&line) {
            Command::Quit => break,
            Command::NewGame => {
                session.reset()?;
                log::debug!("console: new game started");
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            Command::Hint => {
                let hints = session.suggestions();
                writeln!(
                    output,
                    "💡 {} candidates remain: {}\n",
                    session.candidate_count(),
                    format_words(&hints)
                )?;
                continue;
            }
            Command::Auto => {
                let candidates = session.candidates();
                match strategy.select_guess(&candidates, session.rng_mut()) {
                    Some(word) => {
                        writeln!(output, "🤖 Solver plays {}", word.text().to_uppercase())?;
                        word.text().to_string()
                    }
                    None => {
                        writeln!(output, "No candidates remain!\n")?;
                        continue;
                    }
                }
            }
            Command::Guess(text) => text.to_string(),
        };

        let result = match session.guess(&guess) {
            Ok(result) => result,
            Err(e) => {
                writeln!(output, "{}\n", format!("❌ {e}").red())?;
                continue;
            }
        };

        writeln!(output, "{}", colorize_guess(&result.guess, &result.feedback))?;
        stats.record(&result.outcome, session.guess_count());

        match &result.outcome {
            Outcome::Continue => {
                writeln!(
                    output,
                    "{} candidates remain. Suggestions: {}\n",
                    result.remaining,
                    format_words(&result.suggestions)
                )?;
            }
            Outcome::Won => {
                writeln!(
                    output,
                    "\n{}",
                    format!(
                        "🎉 Well done! Solved in {} {}",
                        session.guess_count(),
                        if session.guess_count() == 1 { "guess" } else { "guesses" }
                    )
                    .bright_green()
                    .bold()
                )?;
            }
            Outcome::Lost { hidden } => {
                writeln!(
                    output,
                    "\n{} {}",
                    "Better luck next time, the hidden word was".red(),
                    hidden.text().to_uppercase().bright_yellow().bold()
                )?;
            }
        }

        if session.state() != GameState::InProgress {
            let answer = read_line(input, output, "Play again? (yes/no)")?;
            match answer.as_deref() {
                Some("yes" | "y") => {
                    session.reset()?;
                    log::debug!("console: new game started");
                    writeln!(output, "\n🔄 New game started!\n")?;
                }
                _ => break,
            }
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! Won {} of {} games.",
        stats.games_won, stats.total_games
    )?;
    Ok(stats)
}

fn print_banner<R: Rng, O: Write>(session: &GameSession<R>, output: &mut O) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Wordle - Console Mode                    ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the hidden {}-letter word in {} tries ({} words in the dictionary).",
        crate::core::WORD_LENGTH,
        session.config().max_guesses,
        session.dictionary_size()
    )?;
    writeln!(output, "Commands: 'hint', 'auto' (let the solver guess), 'new', 'quit'\n")?;
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;
    use crate::solver::FrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session() -> GameSession {
        GameSession::with_hidden_word(
            words_from_slice(&["apple", "angle", "ample", "amble", "axles"]),
            "apple",
            SessionConfig::default(),
            StdRng::seed_from_u64(1),
        )
        .unwrap()
    }

    fn play(script: &str) -> (Statistics, String) {
        let mut session = session();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let stats = run_console(&mut session, &FrequencyStrategy, &mut input, &mut output).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game() {
        let (stats, out) = play("angle\napple\nno\n");
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!(out.contains("Solved in 2 guesses"));
    }

    #[test]
    fn invalid_guesses_are_reported() {
        let (stats, out) = play("app\ncrane\nquit\n");
        assert_eq!(stats.total_games, 0);
        assert!(out.contains("5-letter word"));
        assert!(out.contains("not in the word list"));
    }

    #[test]
    fn hint_lists_candidates() {
        let (_, out) = play("hint\nq\n");
        assert!(out.contains("5 candidates remain"));
    }

    #[test]
    fn auto_lets_solver_play() {
        let (stats, out) = play("auto\nauto\nauto\nauto\nauto\nno\n");
        assert!(out.contains("Solver plays"));
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn end_of_input_stops() {
        let (stats, out) = play("");
        assert_eq!(stats.total_games, 0);
        assert!(out.contains("Thanks for playing"));
    }
}
