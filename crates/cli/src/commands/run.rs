use anyhow::{Context, Result, bail};
use genmod_sim::simulation::{Simulation, SimulationParameters, SimulationResult};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::args::RunArgs;
use crate::printing::{print_parameters, print_summary};
use crate::utils::{read_description, write_output};

/// One replicate of a run.
#[derive(Debug, Serialize, Deserialize)]
pub struct Replicate {
    pub replicate: usize,
    pub seed: u64,
    #[serde(flatten)]
    pub result: SimulationResult,
}

/// Everything `run` writes.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunOutput {
    pub parameters: SimulationParameters,
    pub replicates: Vec<Replicate>,
}

pub fn load_parameters(path: Option<&Path>) -> Result<SimulationParameters> {
    let Some(path) = path else {
        return Ok(SimulationParameters::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    if args.replicates == 0 {
        bail!("--replicates must be at least 1");
    }

    let mut parameters = load_parameters(args.config.as_deref())?;
    args.apply(&mut parameters);
    parameters.validate().context("Invalid simulation parameters")?;

    let left = read_description(&args.left)?;
    let right = read_description(&args.right)?;

    // Replicates derive their seeds from one base seed
    let base_seed = parameters.seed.unwrap_or_else(|| rand::rng().random());
    info!(base_seed, replicates = args.replicates, "Seeding replicates.");

    if args.output.is_some() {
        println!("🧬 GenMod - Running Simulation");
        println!("============================================");
        print_parameters(&parameters, base_seed, args.replicates);
    }

    let total_steps = (parameters.number_of_transformations * args.replicates) as u64;
    let pb = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total_steps);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let replicates: Vec<Replicate> = (0..args.replicates)
        .into_par_iter()
        .map(|replicate| -> Result<Replicate> {
            let seed = base_seed.wrapping_add(replicate as u64);
            let replicate_parameters = SimulationParameters {
                seed: Some(seed),
                ..parameters.clone()
            };
            let mut sim = Simulation::new(replicate_parameters, &left, &right)
                .with_context(|| format!("Replicate {replicate}"))?;
            while sim
                .step()
                .with_context(|| format!("Replicate {replicate}"))?
                .is_some()
            {
                pb.inc(1);
            }
            Ok(Replicate {
                replicate,
                seed,
                result: sim.into_result(),
            })
        })
        .collect::<Result<_>>()?;
    pb.finish_and_clear();

    let output = RunOutput {
        parameters,
        replicates,
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    write_output(args.output.as_deref(), &json)?;

    if let Some(path) = &args.output {
        print_summary(&output.replicates);
        println!("\n✓ Results written to {}", path.display());
    }
    Ok(())
}
