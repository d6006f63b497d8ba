use clap::Args;
use genmod_sim::simulation::SimulationParameters;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Left chromosome description file
    #[arg(short, long)]
    pub left: PathBuf,

    /// Right chromosome description file
    #[arg(short, long)]
    pub right: PathBuf,

    /// JSON parameter file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of transformations
    #[arg(short = 'n', long)]
    pub transformations: Option<usize>,

    /// Percentage of translocations (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub translocations: Option<u8>,

    /// Probability that a non-breakable region breaks anyway
    #[arg(long)]
    pub random_error: Option<f64>,

    /// Longer regions break with higher probability
    #[arg(long)]
    pub longer_breaks_often: bool,

    /// Genes per essential gene window
    ///
    /// Enables essential gene pairs; requires --essential-min.
    #[arg(long, requires = "essential_min")]
    pub essential_window: Option<usize>,

    /// Essential genes that protect a window
    #[arg(long, requires = "essential_window")]
    pub essential_min: Option<usize>,

    /// Treat { } blocks as non-breakable
    #[arg(long)]
    pub coexpression: bool,

    /// Skip the edit distance computation after every step
    #[arg(long)]
    pub no_diffs: bool,

    /// Probability that a translocated segment is reversed
    #[arg(long)]
    pub reversal_probability: Option<f64>,

    /// Random seed; replicate i uses seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent replicates, run in parallel
    #[arg(long, default_value_t = defaults::REPLICATES)]
    pub replicates: usize,

    /// Output JSON file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl RunArgs {
    /// Apply the flags that were given on top of `parameters`.
    pub fn apply(&self, parameters: &mut SimulationParameters) {
        if let Some(n) = self.transformations {
            parameters.number_of_transformations = n;
        }
        if let Some(rate) = self.translocations {
            parameters.rate_of_translocations = rate;
        }
        if let Some(p) = self.random_error {
            parameters.random_error = p;
        }
        if self.longer_breaks_often {
            parameters.longer_breaks_often = true;
        }
        if let (Some(window), Some(min)) = (self.essential_window, self.essential_min) {
            parameters.use_essential_gene_pairs = true;
            parameters.essential_genes_window_size = Some(window);
            parameters.essential_genes_in_window = Some(min);
        }
        if self.coexpression {
            parameters.use_coexpression = true;
        }
        if self.no_diffs {
            parameters.compute_diffs = false;
        }
        if let Some(p) = self.reversal_probability {
            parameters.reversal_probability = p;
        }
        if let Some(seed) = self.seed {
            parameters.seed = Some(seed);
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of genes
    #[arg(short = 'g', long, default_value_t = defaults::NUMBER_OF_GENES)]
    pub genes: usize,

    /// Minimum gene length
    #[arg(long, default_value_t = defaults::MIN_GENE_LENGTH)]
    pub min_gene_length: usize,

    /// Maximum gene length
    #[arg(long, default_value_t = defaults::MAX_GENE_LENGTH)]
    pub max_gene_length: usize,

    /// Minimum intergenic region length
    #[arg(long, default_value_t = defaults::MIN_INTERGENIC_LENGTH)]
    pub min_intergenic_length: usize,

    /// Maximum intergenic region length
    #[arg(long, default_value_t = defaults::MAX_INTERGENIC_LENGTH)]
    pub max_intergenic_length: usize,

    /// Mark about one gene in five as essential
    #[arg(long)]
    pub essential: bool,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Chromosome description file
    pub file: PathBuf,

    /// Treat { } blocks as non-breakable
    #[arg(long)]
    pub coexpression: bool,

    /// Print a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}
