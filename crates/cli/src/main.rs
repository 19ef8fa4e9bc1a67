//! Command Line Interface for the sandwich-resistant hook visualizer.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use hookviz_domain::classification::classify_raw;
use hookviz_domain::scenario::Scenario;
use hookviz_sequencer::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod render;

use render::{ConsoleSink, JsonLinesSink, label_table};

#[derive(Parser)]
#[command(name = "hookviz")]
#[command(about = "Sandwich-Resistant Hook block-by-block visualizer", long_about = None)]
struct Cli {
    /// Scenario JSON file (defaults to the built-in sandwich attack)
    #[arg(long, global = true, env = "HOOKVIZ_SCENARIO")]
    scenario: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table of swap labels per block
    Table,
    /// Play the scenario and print the operation stream
    Play {
        /// Stop after this many swaps (overrides the scenario)
        #[arg(long, conflicts_with = "all")]
        stop_after: Option<usize>,

        /// Play every swap, ignoring the scenario's stop limit
        #[arg(long)]
        all: bool,

        /// Emit operations as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Classify a comma-separated liquidity distribution into zones
    Classify {
        /// Slot values, e.g. 1,1,1,0,0,1
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print the built-in scenario as JSON
    Scenario,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            let scenario = Scenario::from_json(&json)
                .with_context(|| format!("loading scenario {}", path.display()))?;
            tracing::info!(path = %path.display(), "scenario loaded");
            Ok(scenario)
        }
        None => Scenario::sandwich_attack().context("building the built-in scenario"),
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Table => {
            let scenario = load_scenario(cli.scenario.as_deref())?;
            let table = project(&scenario.blocks)?;
            label_table(&table).printstd();
        }
        Commands::Play {
            stop_after,
            all,
            json,
        } => {
            let scenario = load_scenario(cli.scenario.as_deref())?;
            let table = project(&scenario.blocks)?;
            let limit = if *all {
                None
            } else {
                stop_after.or(scenario.stop_after)
            };
            let stop = move |progress: &PlaybackProgress| {
                limit.is_some_and(|n| progress.events_played >= n)
            };
            let initial = PresentationState::new(scenario.initial.clone());

            let stdout = io::stdout();
            let summary = if *json {
                let mut sink = JsonLinesSink::new(stdout.lock());
                play(&scenario.blocks, initial, &mut sink, stop)?
            } else {
                let mut sink = ConsoleSink::new(stdout.lock(), table);
                sink.intro(&scenario)?;
                let summary = play(&scenario.blocks, initial, &mut sink, stop)?;
                sink.outro(&summary.state)?;
                summary
            };

            tracing::info!(
                events = summary.events_played,
                operations = summary.operations_emitted,
                stopped_early = summary.stopped_early,
                "done"
            );
        }
        Commands::Classify { values } => {
            let tags = classify_raw(values)?;
            let mut out = io::stdout().lock();
            for (value, tag) in values.iter().zip(tags) {
                writeln!(out, "{value:>4}  {:<5}  {tag:?}", tag.color())?;
            }
        }
        Commands::Scenario => {
            println!("{}", Scenario::sandwich_attack()?.to_json()?);
        }
    }

    Ok(())
}
