use genmod_sim::simulation::SimulationParameters;

use crate::commands::run::Replicate;

pub fn print_parameters(parameters: &SimulationParameters, base_seed: u64, replicates: usize) {
    println!("\n📋 Simulation Configuration");
    println!(
        "  • Transformations: {} [-n, --transformations]",
        parameters.number_of_transformations
    );
    println!(
        "    - Translocations: {} ({}%) [--translocations]",
        parameters.number_of_translocations(),
        parameters.rate_of_translocations
    );
    println!("    - Inversions: {}", parameters.number_of_inversions());
    println!("  • Replicates: {replicates} [--replicates]");
    match parameters.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random ({base_seed}) [--seed]"),
    }

    println!("\n✂️  Breakage");
    println!(
        "  • Random Error: {:.3} [--random-error]",
        parameters.random_error
    );
    println!(
        "  • Longer Breaks Often: {} [--longer-breaks-often]",
        parameters.longer_breaks_often
    );
    println!(
        "  • Reversal Probability: {:.2} [--reversal-probability]",
        parameters.reversal_probability
    );
    println!(
        "  • Coexpression Blocks: {} [--coexpression]",
        if parameters.use_coexpression {
            "Non-breakable"
        } else {
            "Ignored"
        }
    );
    match (
        parameters.use_essential_gene_pairs,
        parameters.essential_genes_window_size,
        parameters.essential_genes_in_window,
    ) {
        (true, Some(window), Some(min)) => println!(
            "  • Essential Gene Windows: {window} genes, protected from {min} essential [--essential-window, --essential-min]"
        ),
        _ => println!("  • Essential Gene Windows: Disabled"),
    }
    println!();
}

pub fn print_summary(replicates: &[Replicate]) {
    println!("\n📊 Results");
    for replicate in replicates {
        let result = &replicate.result;
        let distance = result
            .final_distance()
            .map_or_else(|| "n/a".to_string(), |d| d.to_string());
        println!(
            "  • Replicate {} (seed {}): {}/{} steps applied, final distance {}",
            replicate.replicate,
            replicate.seed,
            result.applied_steps(),
            result.history.len(),
            distance
        );
    }
}
