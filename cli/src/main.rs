use anyhow::{Context, Result};
use clap::Parser;

use chsh_simulator_core_rs::experiment::{
    run_experiment, ExperimentConfig, OptimizerConfig, RunSpec, DEFAULT_OPTIMIZE_ERRORS,
};
use chsh_simulator_core_rs::{HarnessConfig, QuantumParams, StrategyConfig};

mod cli;
mod logging;

use cli::{Cli, Commands, StrategyKind};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let harness = HarnessConfig {
        seed: cli.seed,
        num_workers: cli.workers,
    };

    let config = match cli.command {
        Commands::Play {
            strategy,
            trials,
            answer,
            err,
            diff_a,
            diff_0,
            diff_b,
            bob_first,
        } => {
            let (label, strategy) = match strategy {
                StrategyKind::Random => ("Pure Random", StrategyConfig::Random),
                StrategyKind::Classical => ("Classical Strategy", StrategyConfig::Classical { answer }),
                StrategyKind::Quantum => (
                    "Quantum Strategy",
                    StrategyConfig::Quantum(
                        QuantumParams::new(err, diff_a, diff_0, diff_b).with_alice_first(!bob_first),
                    ),
                ),
            };
            ExperimentConfig {
                trials,
                harness,
                runs: vec![RunSpec::Single {
                    label: label.to_string(),
                    strategy,
                }],
            }
        }
        Commands::Compare { trials } => ExperimentConfig {
            trials,
            harness,
            runs: vec![RunSpec::Comparison],
        },
        Commands::Sweep { trials, steps } => ExperimentConfig {
            trials,
            harness,
            runs: vec![RunSpec::NoiseSweep {
                angles: QuantumParams::optimal(),
                steps,
            }],
        },
        Commands::Optimize {
            trials,
            errors,
            generations,
            popsize,
        } => ExperimentConfig {
            trials,
            harness,
            runs: vec![RunSpec::Optimize {
                errors: errors.unwrap_or_else(|| DEFAULT_OPTIMIZE_ERRORS.to_vec()),
                optimizer: OptimizerConfig {
                    popsize,
                    max_generations: generations,
                    seed: cli.seed,
                    ..OptimizerConfig::default()
                },
            }],
        },
        Commands::Run { config } => {
            let text = std::fs::read_to_string(&config)
                .with_context(|| format!("Failed to read config {}", config.display()))?;
            let mut parsed = ExperimentConfig::from_json(&text)
                .with_context(|| format!("Failed to parse config {}", config.display()))?;
            // Command-line flags override the file
            if cli.seed.is_some() {
                parsed.harness.seed = cli.seed;
            }
            if cli.workers.is_some() {
                parsed.harness.num_workers = cli.workers;
            }
            parsed
        }
    };

    let report = run_experiment(&config).context("Experiment failed")?;
    tracing::info!(
        run_id = report.run_id.as_str(),
        config_hash = report.config_hash.as_str(),
        "experiment finished"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}
