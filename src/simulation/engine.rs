//! Per-step orchestration of the simulation core
//!
//! One fixed timestep is: detect overlaps, resolve merges (mutating the
//! registry), then accumulate gravity over the surviving bodies. Forces
//! are returned to the caller for the external integrator, so they are
//! never computed against a body destroyed in the same step.

use crate::simulation::collisions::{detect_collisions, resolve_collisions, MergeStats};
use crate::simulation::forces::{ForceMap, ForceSet};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Registry;

/// Result of one orchestrated step: the force map for the integrator
/// plus what accretion did to the registry.
#[derive(Debug)]
pub struct StepOutcome {
    pub forces: ForceMap,
    pub stats: MergeStats,
}

/// Advance the core by one tick: collisions -> accretion -> gravity.
/// Mutates `registry` in place; the returned forces reference only
/// bodies that survived this step's merges.
pub fn step(registry: &mut Registry, forces: &ForceSet) -> StepOutcome {
    let events = detect_collisions(registry);
    let stats = resolve_collisions(registry, events);

    let mut out = ForceMap::new();
    forces.accumulate_forces(registry, &mut out);

    StepOutcome { forces: out, stats }
}

/// Aggregate numbers for a finished headless run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub steps: u64,
    pub merges: usize,
    pub absorptions: usize,
    pub final_bodies: usize,
    pub final_star_mass: f64,
    pub total_mass: f64,
}

/// Run the fixed-timestep loop to `t_end`, closing the loop with the
/// built-in semi-implicit Euler integrator. Used by the CLI runner and
/// the long-horizon tests.
pub fn run_headless(scenario: &mut Scenario) -> RunSummary {
    run_headless_with(scenario, |_, _| {})
}

/// Like [`run_headless`], invoking `observe(step_index, registry)` after
/// every integrated step (progress printing, diagnostics).
pub fn run_headless_with<F>(scenario: &mut Scenario, mut observe: F) -> RunSummary
where
    F: FnMut(u64, &Registry),
{
    let params: Parameters = scenario.parameters.clone();
    let steps = (params.t_end / params.h0).ceil() as u64;

    let mut merges = 0;
    let mut absorptions = 0;

    for i in 0..steps {
        let outcome = step(&mut scenario.registry, &scenario.forces);
        merges += outcome.stats.merges;
        absorptions += outcome.stats.absorptions;

        euler_integrator(&mut scenario.registry, &outcome.forces, &params);
        observe(i + 1, &scenario.registry);
    }

    let star_mass = scenario
        .registry
        .body(scenario.registry.star_id())
        .map(|s| s.m)
        .unwrap_or(0.0);

    RunSummary {
        steps,
        merges,
        absorptions,
        final_bodies: scenario.registry.len(),
        final_star_mass: star_mass,
        total_mass: scenario.registry.total_mass(),
    }
}
