use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chsh-sim")]
#[command(author, version, about = "Simulate the CHSH game under random, classical and quantum strategies")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base seed for reproducible runs (fresh entropy when omitted)
    #[arg(long, global = true, env = "CHSH_SEED")]
    pub seed: Option<u64>,

    /// Number of index partitions (defaults to the thread pool size)
    #[arg(long, global = true)]
    pub workers: Option<usize>,

    /// Print JSON instead of the text rendering
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one strategy and print its statistics
    Play {
        #[arg(value_enum)]
        strategy: StrategyKind,

        /// Number of rounds
        #[arg(short = 'n', long, default_value_t = 500_000)]
        trials: usize,

        /// Fixed answer of the classical strategy
        #[arg(long)]
        answer: bool,

        /// Noise of the shared state, in [0, 1]
        #[arg(long, default_value_t = 0.0)]
        err: f64,

        /// Alice's rotation for x = 1 (radians)
        #[arg(long, default_value_t = std::f64::consts::FRAC_PI_4, allow_negative_numbers = true)]
        diff_a: f64,

        /// Bob's base rotation (radians)
        #[arg(long = "diff-0", default_value_t = std::f64::consts::FRAC_PI_8, allow_negative_numbers = true)]
        diff_0: f64,

        /// Bob's extra rotation for y = 1 (radians)
        #[arg(long, default_value_t = -std::f64::consts::FRAC_PI_4, allow_negative_numbers = true)]
        diff_b: f64,

        /// Let Bob measure before Alice
        #[arg(long)]
        bob_first: bool,
    },

    /// Classical, random, 0/1-basis and optimal-basis runs side by side
    Compare {
        #[arg(short = 'n', long, default_value_t = 500_000)]
        trials: usize,
    },

    /// Quantum win rate at optimal angles as noise goes from 0 to 1
    Sweep {
        #[arg(short = 'n', long, default_value_t = 500_000)]
        trials: usize,

        /// Number of noise intervals
        #[arg(long, default_value_t = 100)]
        steps: usize,
    },

    /// Search the measurement angles maximizing the win rate
    Optimize {
        #[arg(short = 'n', long, default_value_t = 100_000)]
        trials: usize,

        /// Noise levels to optimize for
        #[arg(long, value_delimiter = ',')]
        errors: Option<Vec<f64>>,

        #[arg(long, default_value_t = 50)]
        generations: usize,

        #[arg(long, default_value_t = 15)]
        popsize: usize,
    },

    /// Run an experiment described by a JSON config file
    Run {
        config: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Classical,
    Quantum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantum_play() {
        let cli = Cli::try_parse_from([
            "chsh-sim", "--seed", "7", "play", "quantum", "-n", "1000", "--err", "0.1",
            "--diff-b", "-0.5", "--bob-first",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Commands::Play {
                strategy,
                trials,
                err,
                diff_b,
                bob_first,
                ..
            } => {
                assert_eq!(strategy, StrategyKind::Quantum);
                assert_eq!(trials, 1000);
                assert_eq!(err, 0.1);
                assert_eq!(diff_b, -0.5);
                assert!(bob_first);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_optimize_error_list() {
        let cli = Cli::try_parse_from(["chsh-sim", "optimize", "--errors", "0,0.1,0.5"]).unwrap();
        match cli.command {
            Commands::Optimize { errors, .. } => assert_eq!(errors, Some(vec![0.0, 0.1, 0.5])),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
