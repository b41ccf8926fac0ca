use std::time::Instant;

use crate::simulation::engine::step;
use crate::simulation::forces::{Force, ForceMap, ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Registry};

/// Helper to build a registry of size `n` (star + n-1 planets)
fn make_registry(n: usize) -> Registry {
    let mut registry = Registry::with_star(1000.0, 0.5, NVec3::zeros(), NVec3::zeros());

    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            0.0,
            (i_f * 0.13).cos() * 5.0,
        );
        registry.add_planet(1.0, 0.01, x, NVec3::zeros());
    }

    registry
}

fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        seed: 42,
        G: 0.1,
    }
}

/// Time one direct gravity accumulation for a range of N
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let registry = make_registry(n);
        let params = make_params();

        let gravity = NewtonianGravity { G: params.G };
        let mut out = ForceMap::new();
        for b in registry.bodies() {
            out.insert(b.id, NVec3::zeros());
        }

        // Warm up
        gravity.accumulate(&registry, &mut out);

        // Time direct sum
        let t0 = Instant::now();
        gravity.accumulate(&registry, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
}

/// Time the full orchestrated step (collisions + accretion + gravity)
/// for a range of N. Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 200 to give smoother graph
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let mut registry = make_registry(n);
        let params = make_params();
        let forces = ForceSet::new().with(NewtonianGravity { G: params.G });

        // Warm-up
        let _ = step(&mut registry, &forces);

        let t0 = Instant::now();
        for _ in 0..steps {
            let _ = step(&mut registry, &forces);
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms_step = elapsed / steps as f64;

        println!("{},{:.6}", n, ms_step);
    }
}
