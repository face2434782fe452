use std::time::Instant;

use nbody_simulation::{body, NBodySystem};

fn main() {
    println!("N-Body Simulation Benchmark");
    println!("---------------------------");
    println!("Cores available: {}", num_cpus::get());

    let body_counts = [100, 1000, 4000];
    let steps = 100;
    let dt = 1e-3;

    println!("Running {} steps with dt={}", steps, dt);
    println!("\nBody Count | Runtime (s) | Avg Step Time (s)");
    println!("-----------|-------------|------------------");

    for &n in &body_counts {
        fastrand::seed(12345);
        let mut system = NBodySystem::new(body::orbit_ring(n));

        let start = Instant::now();
        for _ in 0..steps {
            system.step(dt);
        }
        let runtime = start.elapsed().as_nanos() as f64 / 1e9;

        println!(
            "{:10} | {:11.4} | {:17.6}",
            system.len(),
            runtime,
            runtime / steps as f64
        );
    }
}
