//! Command-line entry point.
//!
//! Reads the line-oriented payload from stdin and writes the report to
//! stdout. On any failure nothing is written to stdout, the error goes to
//! stderr and the exit status is non-zero.

use clap::builder::BoolishValueParser;
use clap::Parser;
use log::{debug, error};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cpu_schedule::config::EngineConfig;
use cpu_schedule::dispatching::PriorityOrder;
use cpu_schedule::models::Discipline;
use cpu_schedule::parser;
use cpu_schedule::report::Report;
use cpu_schedule::scheduler::Simulator;

/// Simulate single-CPU scheduling disciplines over a process set read from stdin.
///
/// Input: process count, one `arrival burst priority` line per process,
/// then the quantum.
#[derive(Debug, Parser)]
#[command(name = "cpu-schedule", version, after_help = "Logging is controlled by RUST_LOG.")]
struct Cli {
    /// JSON engine configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Discipline to run (repeatable): fcfs, sjf, priority, rr, irr.
    #[arg(
        long = "discipline",
        value_name = "NAME",
        env = "CPUSCHED_DISCIPLINES",
        value_delimiter = ','
    )]
    disciplines: Vec<Discipline>,

    /// Direction of the priority value: lower or higher.
    #[arg(long, value_name = "ORDER", env = "CPUSCHED_PRIORITY")]
    priority: Option<PriorityOrder>,

    /// Larger priority values run first. Same as `--priority higher`.
    #[arg(long)]
    higher_priority_first: bool,

    /// Simulate disciplines concurrently.
    #[arg(
        long,
        env = "CPUSCHED_PARALLEL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    parallel: Option<bool>,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

/// Layers the JSON file (if any), then env/flags, over the defaults.
fn build_config(cli: &Cli) -> cpu_schedule::Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::new(),
    };

    if !cli.disciplines.is_empty() {
        config.disciplines = cli.disciplines.clone();
    }
    if cli.higher_priority_first {
        config.priority_order = PriorityOrder::HigherFirst;
    } else if let Some(order) = cli.priority {
        config.priority_order = order;
    }
    if let Some(parallel) = cli.parallel {
        config.parallel = parallel;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> cpu_schedule::Result<String> {
    let config = build_config(cli)?;
    debug!("config: {config:?}");

    let input = parser::read_input(io::stdin().lock())?;
    debug!(
        "parsed {} processes, quantum {}",
        input.len(),
        input.quantum_time
    );

    let results = Simulator::with_config(config.clone()).run_all(&input)?;
    let report = Report::new(&input, results, config.priority_order);

    if cli.json {
        report.to_json()
    } else {
        Ok(report.to_text())
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
