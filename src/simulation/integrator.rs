//! Fixed-step time integration for the accretion disk system
//!
//! The engine core only accumulates forces; this is the host half that
//! turns a step's `ForceMap` into updated velocities and positions.
//! Semi-implicit Euler: velocity first from the force, then position
//! from the new velocity.

use crate::simulation::forces::ForceMap;
use crate::simulation::params::Parameters;
use crate::simulation::states::Registry;

/// Advance the system by one step using semi-implicit Euler.
/// Applies `forces` to velocities, then drifts positions, and advances
/// `registry.t` in-place by `params.h0`.
pub fn euler_integrator(registry: &mut Registry, forces: &ForceMap, params: &Parameters) {
    if registry.is_empty() { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt

    for b in registry.bodies_mut() {
        if let Some(f) = forces.get(&b.id) {
            // Kick: v_n+1 = v_n + dt * F / m
            b.v += dt * f / b.m;
        }
        // Drift: x_n+1 = x_n + dt * v_n+1
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    registry.t += dt;
}
