//! Force contributors for the accretion disk engine
//!
//! Defines the force trait and the direct Newtonian gravity solver.
//! Forces are accumulated into a per-body map keyed by `BodyId` and
//! handed to the integrator; the solver itself never mutates positions
//! or velocities.

use std::collections::HashMap;

use crate::simulation::states::{BodyId, NVec3, Registry};

/// Accumulated force per body for one step, keyed by stable id.
pub type ForceMap = HashMap<BodyId, NVec3>;

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all bodies currently in `registry`
    /// - `out` is cleared and seeded with a zero vector per live body,
    ///   then each term adds its contribution
    pub fn accumulate_forces(&self, registry: &Registry, out: &mut ForceMap) {
        // Zero buffer, one entry per live body
        out.clear();
        for b in registry.bodies() {
            out.insert(b.id, NVec3::zeros());
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.accumulate(registry, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on the [`Registry`]
/// Implementations add their contribution into `out[id]` for each body
pub trait Force {
    fn accumulate(&self, registry: &Registry, out: &mut ForceMap);
}

/// Direct Newtonian gravity, exact inverse-square (n^2 pair sum)
/// Pairs at exactly zero separation contribute nothing: the direction
/// is undefined there and the pair is skipped instead of softened
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn accumulate(&self, registry: &Registry, out: &mut ForceMap) {
        let bodies = registry.bodies();
        let n = bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];

            for j in (i + 1)..n {
                let bj = &bodies[j];

                // r is the displacement vector from i to j.
                // i feels a pull along +r, j feels a pull along -r.
                let r = bj.x - bi.x;

                // Squared separation distance |r|^2
                let r2 = r.dot(&r);

                // Coincident bodies have no defined direction; skip the
                // pair rather than divide by zero
                if r2 == 0.0 {
                    continue;
                }

                // F = G * mi * mj / |r|^2, applied along r / |r|,
                // i.e. F_vec = G * mi * mj * r / |r|^3
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let f = self.G * bi.m * bj.m * inv_r3 * r;

                // Equal and opposite (Newton's third law)
                if let Some(fi) = out.get_mut(&bi.id) {
                    *fi += f;
                }
                if let Some(fj) = out.get_mut(&bj.id) {
                    *fj -= f;
                }
            }
        }
    }
}
