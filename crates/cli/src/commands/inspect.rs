use anyhow::{Context, Result};
use genmod_sim::genome::{Chromosome, RegionFactory};
use serde::Serialize;

use crate::args::InspectArgs;
use crate::utils::read_description;

/// Structural summary of one chromosome.
#[derive(Debug, Serialize)]
pub struct ChromosomeSummary {
    pub length: usize,
    pub regions: usize,
    pub genes: usize,
    pub essential_genes: usize,
    pub breakable_regions: usize,
    pub gene_ordinals: Vec<u64>,
    pub description: String,
}

impl ChromosomeSummary {
    pub fn new(chromosome: &Chromosome) -> Self {
        let regions = chromosome.regions();
        Self {
            length: chromosome.len(),
            regions: regions.len(),
            genes: regions.iter().filter(|r| r.is_gene()).count(),
            essential_genes: regions.iter().filter(|r| r.is_essential()).count(),
            breakable_regions: chromosome.breakable_regions().len(),
            gene_ordinals: chromosome.gene_ordinals().iter().map(|o| o.get()).collect(),
            description: chromosome.describe(),
        }
    }
}

pub fn inspect_chromosome(args: &InspectArgs) -> Result<()> {
    let text = read_description(&args.file)?;
    let chromosome = Chromosome::parse(&text, args.coexpression, &mut RegionFactory::new())
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;
    let summary = ChromosomeSummary::new(&chromosome);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\n🧬 Chromosome {}", args.file.display());
    println!("{}", "=".repeat(50));
    println!("Length: {} symbols", summary.length);
    println!("Regions: {}", summary.regions);
    println!(
        "Genes: {} ({} essential)",
        summary.genes, summary.essential_genes
    );
    println!("Breakable regions: {}", summary.breakable_regions);
    if summary.breakable_regions < 2 {
        println!("⚠️  Warning: fewer than two breakable regions, inversions will be skipped.");
    }
    Ok(())
}
