//! `chessmatch <white> <black>`: play one match, or a batch of trials
//!
//! Agent names are `human`, `random`, `minimax` or `montecarlo`. Settings
//! come from the JSON settings file and are overridden by flags. `--trials`
//! alone plays the configured number of trials; `--trials N` plays `N`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_engine::Color;
use chessmatch::config::{default_settings_path, load_settings, save_settings};
use chessmatch::{run_match, run_trials, AgentKind, MatchSettings, Outcome, ResultsFormat};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "chessmatch",
    version,
    about = "Play chess between human, random, minimax and Monte Carlo agents"
)]
struct Cli {
    /// Agent playing White
    white: String,

    /// Agent playing Black
    black: String,

    /// Minimax search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Decisions before the match is called a draw
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for every random choice, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Play a batch of automated matches instead of one; the count defaults
    /// to the configured number of trials
    #[arg(long, value_name = "N", num_args = 0..=1)]
    trials: Option<Option<u32>>,

    /// Worker threads for trials (0: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Encoding of trial records
    #[arg(long, value_enum)]
    format: Option<ResultsFormat>,

    /// Settings file to read (and write with --save-settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store the effective settings before playing
    #[arg(long)]
    save_settings: bool,

    /// Trial results file; stdout if omitted
    #[arg(long)]
    results: Option<PathBuf>,
}

impl Cli {
    /// Whether `--trials` was given, with or without a count
    fn runs_trials(&self) -> bool {
        self.trials.is_some()
    }

    /// Replace settings with every flag that was given
    fn apply_overrides(&self, settings: &mut MatchSettings) {
        if let Some(depth) = self.depth {
            settings.search.depth = depth;
        }
        if let Some(max_plies) = self.max_plies {
            settings.max_plies = max_plies;
        }
        if let Some(seed) = self.seed {
            settings.search.seed = Some(seed);
        }
        if let Some(Some(trials)) = self.trials {
            settings.trials = trials;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if let Some(format) = self.format {
            settings.results_format = format;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let white: AgentKind = cli.white.parse()?;
    let black: AgentKind = cli.black.parse()?;

    let settings_path = cli.config.clone().unwrap_or_else(default_settings_path);
    let mut settings = load_settings(&settings_path);
    cli.apply_overrides(&mut settings);
    if cli.save_settings {
        save_settings(&settings, &settings_path)
            .with_context(|| format!("saving settings to {}", settings_path.display()))?;
    }

    if cli.runs_trials() {
        let mut out: Box<dyn Write> = match &cli.results {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("creating results file {}", path.display()))?,
            )),
            None => Box::new(io::stdout()),
        };
        let tally = run_trials(white, black, &settings, &mut out)?;
        out.flush()?;
        println!(
            "{} trials: White {} / Black {} / Draw {}",
            tally.total(),
            tally.white_wins,
            tally.black_wins,
            tally.draws
        );
        return Ok(());
    }

    let seed = settings.search.seed;
    let mut white_agent = white.build(Color::White, &settings, seed);
    let mut black_agent = black.build(Color::Black, &settings, seed.map(|s| s.wrapping_add(1)));

    let report = run_match(white_agent.as_mut(), black_agent.as_mut(), settings.max_plies);
    println!("{}", report.position);
    match report.outcome {
        Outcome::WhiteWins => println!("White wins!"),
        Outcome::BlackWins => println!("Black wins!"),
        Outcome::Draw => println!("Players draw!"),
    }
    println!(
        "{} plies, {:?} per decision",
        report.plies, report.avg_decision_time
    );
    Ok(())
}
