//! shortlab CLI — evaluate strategy decision cycles from the command line.
//!
//! Commands:
//! - `decide` — evaluate the latest cycle of a candle file, print the decision as JSON
//! - `trace` — walk the history cycle by cycle, applying emitted instructions
//! - `fingerprint` — print the parameter fingerprint for audit/reproducibility
//!
//! The CLI is a stand-in for the execution engine that normally drives the
//! decision function: it owns the position lifecycle flag and the cash figure,
//! and it performs no fill, pricing, or P&L simulation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shortlab_core::data::{clip_for_params, load_candles};
use shortlab_core::domain::{Candle, PositionStatus};
use shortlab_core::strategy::{decide_trades, Decision, DecisionCycle, StrategyParameters};

#[derive(Parser)]
#[command(
    name = "shortlab",
    about = "shortlab CLI — short-only Bollinger/RSI strategy decisions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the latest decision cycle and print it as JSON.
    Decide {
        /// Path to the candle CSV file (timestamp,open,high,low,close,volume).
        #[arg(long)]
        candles: PathBuf,

        /// Path to the strategy parameter TOML file.
        #[arg(long)]
        params: PathBuf,

        /// Treat a short position as currently open.
        #[arg(long, default_value_t = false)]
        position_open: bool,

        /// Cash available for new positions, in the quote currency.
        #[arg(long, default_value_t = 10_000.0)]
        cash: f64,

        /// Timestamp to stamp the decision with (RFC 3339). Defaults to the
        /// latest candle's timestamp.
        #[arg(long)]
        at: Option<String>,
    },
    /// Walk the candle history cycle by cycle, printing fired instructions.
    Trace {
        /// Path to the candle CSV file.
        #[arg(long)]
        candles: PathBuf,

        /// Path to the strategy parameter TOML file.
        #[arg(long)]
        params: PathBuf,

        /// Cash available for new positions, in the quote currency.
        #[arg(long, default_value_t = 10_000.0)]
        cash: f64,

        /// Print every cycle, not just the ones that fire.
        #[arg(long, default_value_t = false)]
        verbose: bool,
    },
    /// Print the deterministic fingerprint of a parameter file.
    Fingerprint {
        /// Path to the strategy parameter TOML file.
        #[arg(long)]
        params: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decide {
            candles,
            params,
            position_open,
            cash,
            at,
        } => cmd_decide(&candles, &params, position_open, cash, at.as_deref()),
        Commands::Trace {
            candles,
            params,
            cash,
            verbose,
        } => cmd_trace(&candles, &params, cash, verbose),
        Commands::Fingerprint { params } => cmd_fingerprint(&params),
    }
}

fn load_inputs(
    candle_path: &PathBuf,
    param_path: &PathBuf,
) -> Result<(Vec<Candle>, StrategyParameters)> {
    let params = StrategyParameters::from_toml_file(param_path)
        .with_context(|| format!("loading parameters from {}", param_path.display()))?;
    let candles = load_candles(candle_path)
        .with_context(|| format!("loading candles from {}", candle_path.display()))?;
    Ok((candles, params))
}

fn cmd_decide(
    candle_path: &PathBuf,
    param_path: &PathBuf,
    position_open: bool,
    cash: f64,
    at: Option<&str>,
) -> Result<()> {
    let (history, params) = load_inputs(candle_path, param_path)?;
    let window = clip_for_params(&history, &params);

    let position = if position_open {
        PositionStatus::ShortOpen
    } else {
        PositionStatus::Flat
    };
    let timestamp = match at {
        Some(raw) => raw
            .parse::<DateTime<Utc>>()
            .with_context(|| format!("invalid --at timestamp '{raw}'"))?,
        None => window
            .last()
            .map(|c| c.timestamp)
            .context("empty candle history")?,
    };
    let decision = decide_trades(
        &params,
        &DecisionCycle {
            timestamp,
            candles: window,
            position,
            cash,
        },
    );

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

fn cmd_trace(candle_path: &PathBuf, param_path: &PathBuf, cash: f64, verbose: bool) -> Result<()> {
    let (history, params) = load_inputs(candle_path, param_path)?;

    println!(
        "# pair {}  fingerprint {}  candles {}",
        params.pair,
        params.fingerprint(),
        history.len()
    );

    let mut position = PositionStatus::Flat;
    let mut fired = 0usize;
    for end in 1..=history.len() {
        let window = clip_for_params(&history[..end], &params);
        let decision = decide_trades(
            &params,
            &DecisionCycle {
                timestamp: history[end - 1].timestamp,
                candles: window,
                position,
                cash,
            },
        );

        if verbose || !decision.instructions.is_empty() {
            print_cycle(&decision, position);
        }
        for instruction in &decision.instructions {
            position = position
                .apply(instruction)
                .context("decision emitted an illegal lifecycle transition")?;
            fired += 1;
        }
    }

    println!("# {fired} instruction(s) over {} cycles, final state {position:?}", history.len());
    Ok(())
}

fn print_cycle(decision: &Decision, position: PositionStatus) {
    let diag: Vec<String> = decision
        .diagnostics
        .iter()
        .map(|(name, value)| format!("{name}={value:.4}"))
        .collect();
    let action = match decision.instructions.first() {
        Some(instruction) => serde_json::to_string(instruction).unwrap_or_default(),
        None => "-".to_string(),
    };
    println!(
        "{}  {:>6}  {}  {}",
        decision.timestamp,
        state_label(position),
        action,
        diag.join(" ")
    );
}

fn state_label(position: PositionStatus) -> &'static str {
    match position {
        PositionStatus::Flat => "flat",
        PositionStatus::ShortOpen => "short",
        PositionStatus::Closed => "closed",
    }
}

fn cmd_fingerprint(param_path: &PathBuf) -> Result<()> {
    let params = StrategyParameters::from_toml_file(param_path)
        .with_context(|| format!("loading parameters from {}", param_path.display()))?;
    println!("{}", params.fingerprint());
    Ok(())
}
