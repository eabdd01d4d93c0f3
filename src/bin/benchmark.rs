//! Performance benchmark comparing the serial and parallel generation scans

use std::time::Instant;

use anyhow::Result;
use species_life::domain::{Algorithm, EvolutionService, GridSize, World, presets};

const SPECIES: u32 = 4;
const DENSITY: f64 = 0.3;

fn soup(size: usize) -> Result<World> {
    let mut rng = presets::seeded_rng(size as u64);
    Ok(presets::random_soup(GridSize::new(size)?, SPECIES, DENSITY, &mut rng)?)
}

/// Milliseconds per generation
fn benchmark(service: &EvolutionService, initial: &World, algorithm: Algorithm, iterations: u32) -> f64 {
    let mut world = initial.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        world = service.evolve(&world, algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<()> {
    println!("=== Multi-Species Life Benchmark ===\n");

    let service = EvolutionService::default();
    let sizes = [50, 100, 250, 500, 1000];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let initial = soup(size)?;
        let serial_ms = benchmark(&service, &initial, Algorithm::Serial, iterations);
        let parallel_ms = benchmark(&service, &initial, Algorithm::Parallel, iterations);

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Algorithms ===\n");
    for algorithm in Algorithm::all() {
        println!("{:>10}: {}", algorithm.name(), algorithm.description());
    }
    Ok(())
}
