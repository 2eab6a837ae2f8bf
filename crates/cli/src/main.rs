mod args;
mod commands;
pub mod defaults;
mod io;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{GlobalOpts, KernelArgs, Overrides};
use commands::{compare, gaps, inspect, mutate, neff, offspring};

/// Sympatric: per-generation engine for trait evolution under competition
///
/// Runs single engine operations (mutation, competition kernel, offspring
/// sampling, gap detection) on trait vectors stored as JSON arrays. Results
/// are written to stdout as JSON; logs go to stderr (set RUST_LOG=debug).
#[derive(Parser, Debug)]
#[command(name = "sympatric")]
#[command(author, version, about = "Per-generation engine for sympatric speciation models", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Engine configuration file (JSON); flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Random seed (default: configured seed, else from entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Effective population size of every individual in a community.
    Neff {
        /// Trait values (JSON array, `-` for stdin)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        kernel: KernelArgs,
    },

    /// Effective population size of reference traits against a separate population.
    NeffAgainst {
        /// Reference trait values (JSON array)
        #[arg(short, long)]
        reference: PathBuf,

        /// Population trait values (JSON array)
        #[arg(short, long)]
        population: PathBuf,

        #[command(flatten)]
        kernel: KernelArgs,
    },

    /// Add Gaussian mutation noise to every trait.
    Mutate {
        /// Trait values (JSON array, `-` for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Mutation standard deviation (>= 0)
        #[arg(long)]
        sd: Option<f64>,

        /// Sample with one independent stream per chunk across threads
        #[arg(long)]
        parallel: bool,
    },

    /// Draw Poisson offspring counts from fitness values.
    Offspring {
        /// Fitness values (JSON array, `-` for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Sample with one independent stream per chunk across threads
        #[arg(long)]
        parallel: bool,
    },

    /// Sort traits and report gaps of at least `min-gap` between neighbours.
    Gaps {
        /// Trait values (JSON array, `-` for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Minimal spacing that counts as a cluster boundary (>= 0)
        #[arg(short, long)]
        min_gap: Option<f64>,

        /// Input is already ascending; verify instead of sorting
        #[arg(long)]
        presorted: bool,
    },

    /// Run every kernel strategy on one community and check they agree.
    Compare {
        /// Trait values (JSON array); random traits are used if omitted
        #[arg(short, long, conflicts_with = "random")]
        input: Option<PathBuf>,

        /// Size of a random community to generate
        #[arg(long)]
        random: Option<usize>,

        #[command(flatten)]
        kernel: KernelArgs,
    },

    /// Show the resolved engine configuration.
    Config,

    /// List available kernel strategies.
    Strategies,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let global = GlobalOpts {
        config: cli.config,
        seed: cli.seed,
    };

    match cli.command {
        Commands::Neff { input, kernel } => {
            let config = global.resolve(Overrides::from(&kernel))?;
            neff::neff(&input, &config)?;
        }
        Commands::NeffAgainst {
            reference,
            population,
            kernel,
        } => {
            let config = global.resolve(Overrides::from(&kernel))?;
            neff::neff_against(&reference, &population, &config)?;
        }
        Commands::Mutate {
            input,
            sd,
            parallel,
        } => {
            let config = global.resolve(Overrides {
                mutation_sd: sd,
                ..Default::default()
            })?;
            mutate::mutate(&input, parallel, &config)?;
        }
        Commands::Offspring { input, parallel } => {
            let config = global.resolve(Overrides::default())?;
            offspring::offspring(&input, parallel, &config)?;
        }
        Commands::Gaps {
            input,
            min_gap,
            presorted,
        } => {
            let config = global.resolve(Overrides {
                min_gap,
                ..Default::default()
            })?;
            gaps::gaps(&input, presorted, &config)?;
        }
        Commands::Compare {
            input,
            random,
            kernel,
        } => {
            let config = global.resolve(Overrides::from(&kernel))?;
            compare::compare(input.as_deref(), random, &config)?;
        }
        Commands::Config => {
            let config = global.resolve(Overrides::default())?;
            inspect::show_config(&config)?;
        }
        Commands::Strategies => {
            let config = global.resolve(Overrides::default())?;
            inspect::list_strategies(&config)?;
        }
    }

    Ok(())
}
