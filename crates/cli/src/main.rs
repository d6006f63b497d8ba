mod args;
mod commands;
pub mod defaults;
mod logging;
mod printing;
mod utils;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use args::{GenerateArgs, InspectArgs, RunArgs};
use commands::{generate, inspect, run};

/// GenMod: A Structural Genome Evolution Simulator
///
/// This tool simulates how the gene order of a chromosome pair changes over
/// time through inversions and translocations.
#[derive(Parser, Debug)]
#[command(name = "genmod")]
#[command(author, version, about = "Simulates inversions and translocations on a chromosome pair", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel replicates
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation on two chromosome descriptions.
    ///
    /// Writes the per-step gene order history and the final chromosomes as
    /// JSON.
    Run(Box<RunArgs>),

    /// Generate a random chromosome description.
    Generate(GenerateArgs),

    /// Show the structure of a chromosome description.
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => run::run_simulation(&args)?,
        Commands::Generate(args) => generate::generate_chromosome(&args)?,
        Commands::Inspect(args) => inspect::inspect_chromosome(&args)?,
    }

    Ok(())
}
