use bandit_sim::config::{AppConfig, Overrides, DEFAULT_CONFIG_FILE};
use bandit_sim::report::Report;
use bandit_sim::{Simulation, SimulationError};

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Run an epsilon-greedy agent against a Bernoulli bandit and report what it learned.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Configuration file, without extension
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
    #[arg(long)]
    arms: Option<usize>,
    #[arg(long)]
    rounds: Option<usize>,
    #[arg(long)]
    epsilon: Option<f64>,
    #[arg(long, env = "BANDIT_SEED")]
    seed: Option<u64>,
    /// Fixed true probabilities, one per arm
    #[arg(long, value_delimiter = ',')]
    probabilities: Option<Vec<f64>>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn simulate(cli: Cli, app: AppConfig) -> Result<Report, SimulationError> {
    let config = app.simulation.with_overrides(Overrides {
        arm_count: cli.arms,
        rounds: cli.rounds,
        epsilon: cli.epsilon,
        seed: cli.seed,
        probabilities: cli.probabilities,
    });

    let result = Simulation::new(config)?.run()?;
    Ok(Report::from(&result))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let app = match AppConfig::load(&cli.config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Cannot read config: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match simulate(cli, app) {
        Ok(report) if json => match report.to_json() {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!(error = %err, "Failed to serialize report");
                ExitCode::FAILURE
            }
        },
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}
