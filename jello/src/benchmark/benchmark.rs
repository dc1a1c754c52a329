use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::simulation::collision::BoundingBox;
use crate::simulation::forces::{AccelSet, BoundaryCollision, SpringNetwork};
use crate::simulation::integrator::{euler_integrator, rk4_integrator};
use crate::simulation::states::{Lattice, LatticeIndex, LatticeState, NVec3};

/// Helper to build a slightly squashed cube so every spring is loaded
fn make_state() -> LatticeState {
    let mut state = LatticeState::cube(NVec3::new(-0.5, -0.5, -0.5), 1.0, NVec3::zeros());
    for idx in LatticeIndex::all() {
        let f = idx.flat() as f64;
        // deterministic positions, no rand needed
        state.positions[idx] += 0.01 * NVec3::new((f * 0.37).sin(), (f * 0.13).cos(), (f * 0.07).sin());
    }
    state
}

/// Helper to build the default jello force set
fn make_forces(parallel: bool) -> AccelSet {
    AccelSet::new(0.002)
        .parallel(parallel)
        .with(SpringNetwork {
            k_elastic: 200.0,
            d_elastic: 0.25,
        })
        .with(BoundaryCollision {
            bbox: BoundingBox::default(),
            k_collision: 400.0,
            d_collision: 0.25,
        })
}

/// Time one full accumulation pass, serial against rayon
pub fn bench_accumulate() {
    let state = make_state();
    let mut out = Lattice::filled(NVec3::zeros());
    let reps = 200;

    println!("mode,us_per_pass");
    for parallel in [false, true] {
        let forces = make_forces(parallel);

        // Warm up
        forces.accumulate_accels(&state, &mut out);

        let t0 = Instant::now();
        for _ in 0..reps {
            forces.accumulate_accels(&state, &mut out);
        }
        let us = t0.elapsed().as_secs_f64() * 1e6 / reps as f64;

        let mode = if parallel { "parallel" } else { "serial" };
        println!("{mode},{us:.3}");
    }
}

/// Time Euler and RK4 steps, serial and parallel
/// Paste output directly into a spreadsheet to compare
pub fn bench_step() {
    let steps = 100;
    let dt = 0.0005;

    println!("integrator,parallel,us_per_step");
    for integrator in [IntegratorConfig::Euler, IntegratorConfig::Rk4] {
        for parallel in [false, true] {
            let forces = make_forces(parallel);
            let mut state = make_state();

            let t0 = Instant::now();
            for _ in 0..steps {
                match integrator {
                    IntegratorConfig::Euler => euler_integrator(&mut state, &forces, dt),
                    IntegratorConfig::Rk4 => rk4_integrator(&mut state, &forces, dt),
                }
            }
            let us = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

            println!("{:?},{},{:.3}", integrator, parallel, us);
        }
    }
}
