//! Compare bandit policies over many episodes.
//!
//! Runs an experiment and prints the averaged final reward and selection
//! counts per policy. Set `RUST_LOG=debug` for per-episode progress.

use std::process::ExitCode;

use clap::Parser;
use kbandit::experiment::{X_LABEL, Y_LABEL};
use kbandit::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Compare k-armed bandit policies", long_about = None)]
struct Args {
    /// Number of arms
    #[arg(long, default_value_t = 10)]
    arms: usize,
    /// Pulls per episode
    #[arg(long, default_value_t = 1000)]
    iterations: usize,
    /// Episodes to average over
    #[arg(long, default_value_t = 1000)]
    episodes: usize,
    /// Seed of the experiment's random source
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// How true means are drawn: "random" or "sequence"
    #[arg(long, default_value = "random")]
    means: String,
    /// Epsilon of an epsilon-greedy policy (repeatable)
    #[arg(long = "epsilon", num_args = 1.., default_values_t = [0.0, 0.01, 0.1])]
    epsilons: Vec<f64>,
    /// Also run pure greedy
    #[arg(long)]
    greedy: bool,
    /// Also run decaying epsilon-greedy
    #[arg(long)]
    decaying: bool,
}

impl Args {
    fn experiment(&self) -> Result<Experiment> {
        let config = ExperimentConfig {
            arms: self.arms,
            iterations: self.iterations,
            episodes: self.episodes,
            seed: self.seed,
            means: self.means.parse()?,
        };
        let mut experiment = Experiment::new(config);
        if self.greedy {
            experiment = experiment.with_policy("greedy", Greedy);
        }
        for &epsilon in &self.epsilons {
            experiment =
                experiment.with_policy(format!("epsilon_{epsilon}"), EpsilonGreedy::new(epsilon));
        }
        if self.decaying {
            experiment = experiment.with_policy("decaying", DecayingEpsilonGreedy);
        }
        Ok(experiment)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let report = match args.experiment().and_then(|experiment| experiment.run()) {
        Ok(report) => report,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.title());
    println!(
        "{:<24}{} after {} {}",
        "policy",
        Y_LABEL,
        args.iterations,
        X_LABEL.to_lowercase()
    );
    println!("{}", "=".repeat(60));
    for (label, series) in report.series() {
        let last = series.rewards.last().copied().unwrap_or(0.0);
        println!("{:<24}final {:>8.4}", label, last);
        let selections = series
            .selections
            .iter()
            .map(|s| format!("{:.1}", s))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<24}picks [{}]", "", selections);
    }
    ExitCode::SUCCESS
}
