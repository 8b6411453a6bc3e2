//! wordgain - CLI
//!
//! Thin front-end over the guess-selection engine: ask for a suggestion given
//! a game history, replay a round against a known target, or benchmark the
//! solver over a seeded batch of games.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use wordgain::{
    core::{Pattern, Word},
    lexicon::Lexicon,
    sim::{DEFAULT_MAX_ATTEMPTS, play_round, seeded_rng, simulate_batch},
    solver::{Engine, ReferenceMode, prune},
};

#[derive(Parser)]
#[command(
    name = "wordgain",
    about = "Entropy-maximization guess selection for 5-letter word games",
    version
)]
struct Cli {
    /// Path to the answer-universe word list
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Path to the guess-universe word list (superset of the answers)
    #[arg(long, global = true, default_value = "data/guesses.txt")]
    guesses: PathBuf,

    /// Reference distribution for scoring: candidates (default) or universe
    #[arg(short, long, global = true, default_value = "candidates")]
    reference: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess given the history so far
    Suggest {
        /// Alternating guess/pattern pairs, e.g. `tares ybbbg crane bybgg`.
        /// Patterns use g = hit, y = present, b = absent.
        history: Vec<String>,
    },

    /// Play one automated round against a known target
    Solve {
        /// The target word to solve
        target: String,

        /// Fixed opening guess
        #[arg(short, long, default_value = "tares")]
        opening: String,
    },

    /// Benchmark the solver over a batch of simulated games
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for target selection (same seed, same batch)
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Fixed opening guess
        #[arg(short, long, default_value = "tares")]
        opening: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lexicon = Lexicon::load(&cli.answers, &cli.guesses)
        .context("failed to load word lists")?;
    let engine = Engine::new(&lexicon)
        .with_reference_mode(ReferenceMode::from_name(&cli.reference));

    match cli.command {
        Commands::Suggest { history } => run_suggest(&engine, &history),
        Commands::Solve { target, opening } => run_solve(&engine, &target, &opening),
        Commands::Simulate {
            games,
            seed,
            opening,
        } => run_simulate(&engine, games, seed, &opening),
    }
}

/// Replay a history of (guess, pattern) pairs and print the engine's pick.
fn run_suggest(engine: &Engine<'_>, history: &[String]) -> Result<()> {
    if history.len() % 2 != 0 {
        bail!("history must be alternating guess/pattern pairs");
    }

    let mut candidates = engine.lexicon().answers().to_vec();
    for pair in history.chunks(2) {
        let guess = Word::new(pair[0].as_str())
            .with_context(|| format!("invalid guess {:?}", pair[0]))?;
        let observed = Pattern::parse(&pair[1])
            .with_context(|| format!("invalid pattern {:?} (use g/y/b)", pair[1]))?;
        candidates = prune(&candidates, &guess, observed);
    }

    println!(
        "{} candidates remain",
        candidates.len().to_string().bright_cyan().bold()
    );

    let suggestion = engine.suggest_guess(&candidates)?;
    println!(
        "suggested guess: {}",
        suggestion.text().to_uppercase().bright_yellow().bold()
    );
    Ok(())
}

/// Play one round against `target`, printing each turn.
fn run_solve(engine: &Engine<'_>, target: &str, opening: &str) -> Result<()> {
    let target = Word::new(target).context("invalid target word")?;
    let opening = Word::new(opening).context("invalid opening word")?;

    let outcome = play_round(engine, &target, &opening, DEFAULT_MAX_ATTEMPTS)?;

    for (turn, guess) in outcome.guesses.iter().enumerate() {
        let pattern = Pattern::calculate(guess, &target);
        println!(
            "  {} {} {}",
            format!("{}.", turn + 1).bright_cyan().bold(),
            guess.text().to_uppercase().bright_white().bold(),
            pattern
        );
    }

    if outcome.solved {
        println!(
            "\n{} in {} attempts",
            "solved".green().bold(),
            outcome.attempts
        );
    } else {
        println!(
            "\n{} after {} attempts",
            "exhausted".red().bold(),
            outcome.attempts
        );
    }
    Ok(())
}

/// Run a seeded batch and print the aggregate report.
fn run_simulate(engine: &Engine<'_>, games: usize, seed: u64, opening: &str) -> Result<()> {
    let opening = Word::new(opening).context("invalid opening word")?;

    println!("simulating {games} games (seed {seed})...");

    let bar = ProgressBar::new(games as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
            .progress_chars("█▓▒░"),
    );

    let cancel = AtomicBool::new(false);
    let mut rng = seeded_rng(seed);
    let report = simulate_batch(engine, &opening, games, &mut rng, &cancel, Some(&bar))?;
    bar.finish_and_clear();

    println!(
        "\n  win rate:         {}",
        format!("{:.1}%", report.win_rate()).green().bold()
    );
    println!(
        "  average attempts: {}",
        format!("{:.3}", report.average_attempts()).bright_yellow().bold()
    );
    println!("  games played:     {}", report.games);
    Ok(())
}
