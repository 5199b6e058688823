//! Wordle - CLI
//!
//! Play Wordle in a TUI or on the console, or let the solver play it.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_game::{
    commands::{SolveConfig, pick_targets, progress_bar, run_benchmark, run_console, solve_word},
    core::Word,
    game::{GameSession, MAX_GUESSES, SUGGESTION_COUNT, SessionConfig},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle with a trie dictionary and a candidate-filtering solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for hidden word and suggestion sampling (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Number of suggested words shown after each guess
    #[arg(long, global = true, default_value_t = SUGGESTION_COUNT)]
    suggestions: usize,

    /// Accept any dictionary word as a guess, not only words still possible
    #[arg(long, global = true)]
    free_guessing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game on stdin/stdout
    Console,

    /// Let the solver find a specific hidden word
    Solve {
        /// The hidden word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random hidden words to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };

    if words.is_empty() {
        bail!("wordlist '{wordlist}' contains no valid 5-letter words");
    }
    log::info!("loaded {} words from {wordlist}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }

    let words = load_wordlist(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let config = SessionConfig::new()
        .with_max_guesses(cli.max_guesses)
        .with_suggestion_count(cli.suggestions)
        .with_restrict_to_candidates(!cli.free_guessing);
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::debug!("seed {seed}, strategy {}, {config:?}", strategy.name());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, config, strategy, seed),
        Commands::Console => run_console_command(words, config, strategy, seed),
        Commands::Solve { word, verbose } => {
            run_solve_command(&words, &word, verbose, config, strategy, seed)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&words, count, config, strategy, seed)
        }
    }
}

fn run_play_command(
    words: Vec<Word>,
    config: SessionConfig,
    strategy: StrategyType,
    seed: u64,
) -> Result<()> {
    let session = GameSession::new(words, config, StdRng::seed_from_u64(seed))?;
    run_tui(App::new(session, strategy))
}

fn run_console_command(
    words: Vec<Word>,
    config: SessionConfig,
    strategy: StrategyType,
    seed: u64,
) -> Result<()> {
    let mut session = GameSession::new(words, config, StdRng::seed_from_u64(seed))?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let stats = run_console(&mut session, &strategy, &mut input, &mut output)?;
    log::info!(
        "console: {} games, {} won ({:.1}%)",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    Ok(())
}

fn run_solve_command(
    words: &[Word],
    word: &str,
    verbose: bool,
    config: SessionConfig,
    strategy: StrategyType,
    seed: u64,
) -> Result<()> {
    let solve_config = SolveConfig {
        target: word.to_string(),
        session: config,
        seed,
    };
    let result = solve_word(words, solve_config, &strategy)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    words: &[Word],
    count: usize,
    config: SessionConfig,
    strategy: StrategyType,
    seed: u64,
) -> Result<()> {
    let targets = pick_targets(words, count, seed);
    println!(
        "Running benchmark on {} random words with the {} strategy...",
        targets.len(),
        strategy.name()
    );

    let pb = progress_bar(targets.len());
    let result = run_benchmark(words, &targets, &strategy, config, seed, Some(&pb))?;
    print_benchmark_result(&result, config.max_guesses);
    Ok(())
}
