use anyhow::{Context, Result};
use genmod_sim::simulation::ChromosomeGenerator;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::info;

use crate::args::GenerateArgs;
use crate::utils::write_output;

pub fn generator_from_args(args: &GenerateArgs) -> ChromosomeGenerator {
    let generator = ChromosomeGenerator::new(args.genes)
        .with_gene_length(args.min_gene_length, args.max_gene_length)
        .with_intergenic_length(args.min_intergenic_length, args.max_intergenic_length);
    if args.essential {
        generator.with_essential_genes()
    } else {
        generator
    }
}

pub fn generate_chromosome(args: &GenerateArgs) -> Result<()> {
    let generator = generator_from_args(args);
    generator
        .validate()
        .context("Invalid generator settings")?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let description = generator.generate(&mut rng)?;
    info!(seed, genes = args.genes, "Generated chromosome.");

    write_output(args.output.as_deref(), &description)?;
    if let Some(path) = &args.output {
        println!("✓ Chromosome with {} genes written to {}", args.genes, path.display());
    }
    Ok(())
}
