use genmod_sim::simulation::{ChromosomeGenerator, Simulation, SimulationParameters};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::Instant;

fn main() {
    let genes = 50;
    let generator = ChromosomeGenerator::new(genes);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    println!("Generating two chromosomes with {genes} genes each...");
    let left = generator.generate(&mut rng).unwrap();
    let right = generator.generate(&mut rng).unwrap();

    for compute_diffs in [false, true] {
        let parameters = SimulationParameters {
            number_of_transformations: 50,
            rate_of_translocations: 30,
            longer_breaks_often: true,
            compute_diffs,
            seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let result = Simulation::new(parameters, &left, &right)
            .unwrap()
            .run()
            .unwrap();
        let duration = start.elapsed();
        println!(
            "compute_diffs={compute_diffs}: {duration:?} ({} steps applied, final distance {:?})",
            result.applied_steps(),
            result.final_distance()
        );
    }
}
