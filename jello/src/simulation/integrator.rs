//! Fixed-step time integrators for the jello lattice
//!
//! Provides explicit Euler and classical fourth-order Runge-Kutta, both
//! driven by an `AccelSet` and advancing `LatticeState` in place with an
//! explicit step `dt`. Neither integrator keeps state between calls.

use super::forces::AccelSet;
use super::states::{Lattice, LatticeIndex, LatticeState, NVec3, World};
use crate::configuration::config::IntegratorConfig;

/// Advance the lattice by one explicit Euler step
/// Uses one force evaluation; positions advance with the velocities from
/// before the step
pub fn euler_integrator(state: &mut LatticeState, forces: &AccelSet, dt: f64) {
    // a_n from (x_n, v_n)
    let mut accel = Lattice::filled(NVec3::zeros());
    forces.accumulate_accels(state, &mut accel);

    // x_n+1 = x_n + dt v_n,  v_n+1 = v_n + dt a_n
    for ((x, v), a) in state
        .positions
        .iter_mut()
        .zip(state.velocities.iter_mut())
        .zip(accel.iter())
    {
        *x += dt * *v;
        *v += dt * *a;
    }
}

/// One Runge-Kutta stage: position and velocity increments over a full step
struct Stage {
    dx: Lattice<NVec3>,
    dv: Lattice<NVec3>,
}

impl Stage {
    /// `k = (dt v, dt a(x, v))` evaluated at `trial`
    fn eval(trial: &LatticeState, forces: &AccelSet, dt: f64, accel: &mut Lattice<NVec3>) -> Self {
        forces.accumulate_accels(trial, accel);
        Self {
            dx: Lattice::from_fn(|idx| dt * trial.velocities[idx]),
            dv: Lattice::from_fn(|idx| dt * accel[idx]),
        }
    }

    /// Overwrite `trial` with `base + frac * k`
    fn trial_state(&self, base: &LatticeState, frac: f64, trial: &mut LatticeState) {
        for idx in LatticeIndex::all() {
            trial.positions[idx] = base.positions[idx] + frac * self.dx[idx];
            trial.velocities[idx] = base.velocities[idx] + frac * self.dv[idx];
        }
    }
}

/// Advance the lattice by one classical RK4 step
/// Uses four force evaluations: at the start, at two half-step trial states
/// and at one full-step trial state
pub fn rk4_integrator(state: &mut LatticeState, forces: &AccelSet, dt: f64) {
    let mut accel = Lattice::filled(NVec3::zeros());
    let mut trial = state.clone();

    // k1 at y_n
    let k1 = Stage::eval(state, forces, dt, &mut accel);

    // k2 at y_n + k1/2
    k1.trial_state(state, 0.5, &mut trial);
    let k2 = Stage::eval(&trial, forces, dt, &mut accel);

    // k3 at y_n + k2/2
    k2.trial_state(state, 0.5, &mut trial);
    let k3 = Stage::eval(&trial, forces, dt, &mut accel);

    // k4 at y_n + k3
    k3.trial_state(state, 1.0, &mut trial);
    let k4 = Stage::eval(&trial, forces, dt, &mut accel);

    // y_n+1 = y_n + (k1 + 2 k2 + 2 k3 + k4) / 6, both channels alike
    for idx in LatticeIndex::all() {
        state.positions[idx] += (k1.dx[idx] + 2.0 * k2.dx[idx] + 2.0 * k3.dx[idx] + k4.dx[idx]) / 6.0;
        state.velocities[idx] += (k1.dv[idx] + 2.0 * k2.dv[idx] + 2.0 * k3.dv[idx] + k4.dv[idx]) / 6.0;
    }
}

/// Advance `world` by one step of its configured integrator, `dt = world.params.dt`
pub fn step(world: &mut World, forces: &AccelSet) {
    let dt = world.params.dt;
    match world.integrator {
        IntegratorConfig::Euler => euler_integrator(&mut world.state, forces, dt),
        IntegratorConfig::Rk4 => rk4_integrator(&mut world.state, forces, dt),
    }
}
