//! Batches of automated matches
//!
//! Plays `settings.trials` matches between two automated agent kinds and
//! writes one record per match, as JSON lines or as CSV with a header row
//! (`settings.results_format`). Matches that reach the ply cap are scored
//! on remaining material instead of being left as draws.
//!
//! Each trial seeds its agents from a base seed (the configured search seed,
//! or a random one that is logged), so a run can be replayed exactly.
//!
//! Trials are independent, so they run on a rayon pool of
//! `settings.threads` workers. Every worker builds its own agents. Records
//! are written once all trials are back, in trial order, so the output does
//! not depend on the thread count.

use std::io::Write;

use chess_engine::evaluation::material_totals;
use chess_engine::Color;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agents::AgentKind;
use crate::config::MatchSettings;
use crate::error::{MatchError, MatchResult};
use crate::match_runner::{run_match, MatchReport, Outcome, Termination};

/// One line of trial output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub trial: u32,
    /// `White`, `Black` or `Draw`
    pub winner: String,
    pub plies: u32,
    /// Milliseconds, two decimals
    pub avg_decision_ms: f64,
}

/// Column names of the CSV results
pub const CSV_HEADER: &str = "Trial,Winner,Move Count,Avg Decision Time (ms)";

/// How trial records are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResultsFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Header row, then one comma separated row per trial
    Csv,
}

impl TrialRecord {
    /// The record as a CSV row, columns as in [`CSV_HEADER`]
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.2}",
            self.trial, self.winner, self.plies, self.avg_decision_ms
        )
    }

    fn write_to<W: Write>(&self, format: ResultsFormat, out: &mut W) -> MatchResult<()> {
        let line = match format {
            ResultsFormat::Json => serde_json::to_string(self).map_err(MatchError::Results)?,
            ResultsFormat::Csv => self.to_csv_row(),
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}

/// Wins and draws across a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialTally {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
}

impl TrialTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws
    }
}

/// Final result of a match, deciding ply-capped games on material
pub fn adjudicate(report: &MatchReport) -> Outcome {
    if report.termination != Termination::PlyLimit {
        return report.outcome;
    }
    let (white, black) = material_totals(&report.position);
    if white > black {
        Outcome::WhiteWins
    } else if black > white {
        Outcome::BlackWins
    } else {
        Outcome::Draw
    }
}

/// Play `settings.trials` matches, writing a record per match to `out`
///
/// # Errors
///
/// [`MatchError::InteractiveTrials`] if either agent is human,
/// [`MatchError::ThreadPool`] if the workers cannot start, or an I/O or
/// encoding error from `out`.
pub fn run_trials<W: Write>(
    white: AgentKind,
    black: AgentKind,
    settings: &MatchSettings,
    out: &mut W,
) -> MatchResult<TrialTally> {
    if !white.is_automated() || !black.is_automated() {
        return Err(MatchError::InteractiveTrials {
            white: white.to_string(),
            black: black.to_string(),
        });
    }

    let base_seed = settings.search.seed.unwrap_or_else(rand::random);
    info!(
        "[TRIALS] {} trials of {} vs {} (base seed {}, {} threads)",
        settings.trials, white, black, base_seed, settings.threads
    );

    let play = |trial: u32| play_trial(white, black, settings, base_seed, trial);
    let reports: Vec<MatchReport> = if settings.threads == 1 {
        (1..=settings.trials).map(&play).collect()
    } else {
        let pool = ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build()?;
        pool.install(|| (1..=settings.trials).into_par_iter().map(&play).collect())
    };

    if settings.results_format == ResultsFormat::Csv {
        writeln!(out, "{CSV_HEADER}")?;
    }

    let mut tally = TrialTally::default();
    for (trial, report) in (1..).zip(&reports) {
        let outcome = adjudicate(report);
        tally.record(outcome);

        let millis = report.avg_decision_time.as_secs_f64() * 1000.0;
        let record = TrialRecord {
            trial,
            winner: outcome.winner_label().to_string(),
            plies: report.plies,
            avg_decision_ms: (millis * 100.0).round() / 100.0,
        };
        record.write_to(settings.results_format, out)?;

        info!(
            "[TRIALS] trial {}: {} after {} plies ({:?})",
            trial, record.winner, record.plies, report.termination
        );
    }

    info!(
        "[TRIALS] White {} / Black {} / Draw {}",
        tally.white_wins, tally.black_wins, tally.draws
    );
    Ok(tally)
}

/// One match with agents seeded for `trial`
fn play_trial(
    white: AgentKind,
    black: AgentKind,
    settings: &MatchSettings,
    base_seed: u64,
    trial: u32,
) -> MatchReport {
    let seed = base_seed.wrapping_add(2 * u64::from(trial));
    let mut white_agent = white.build(Color::White, settings, Some(seed));
    let mut black_agent = black.build(Color::Black, settings, Some(seed.wrapping_add(1)));

    debug!("[TRIALS] trial {} starts (seed {})", trial, seed);
    run_match(white_agent.as_mut(), black_agent.as_mut(), settings.max_plies)
}
