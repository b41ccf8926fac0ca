//! Randomized initial conditions for the planetary disk
//!
//! `DiskSampler` places planets in an annulus around the star and gives
//! each one the circular-orbit speed for its radius under the two-body
//! approximation (other planets' masses ignored at initialization).
//! Sampling is driven by a caller-supplied seeded RNG so runs are
//! reproducible.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::simulation::states::{NVec3, Registry};

/// Samples planet initial states in the disk plane (y = 0).
#[derive(Debug, Clone)]
pub struct DiskSampler {
    pub min_radius: f64, // inner edge of the annulus, > 0
    pub max_radius: f64, // outer edge, >= min_radius
    pub planet_mass: f64,
    pub planet_radius: f64,
    pub g: f64, // gravitational constant
}

impl DiskSampler {
    /// Add `n` planets around the registry's star.
    ///
    /// Per planet: orbital radius uniform in `[min_radius, max_radius]`,
    /// angle uniform in `[0, 2pi)`, speed `sqrt(G * M_star / r)` directed
    /// perpendicular to the radius vector within the disk plane.
    ///
    /// Radii are validated at configuration time, before any sampling.
    pub fn sample_planets(&self, registry: &mut Registry, n: usize, rng: &mut ChaChaRng) {
        let Some(star) = registry.body(registry.star_id()).cloned() else {
            return;
        };
        let plane_normal = NVec3::y();

        for _ in 0..n {
            let radius = rng.random_range(self.min_radius..=self.max_radius);
            let angle = rng.random_range(0.0..std::f64::consts::TAU);

            let offset = NVec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
            let x = star.x + offset;

            // Circular-orbit speed for this radius, two-body approximation
            let speed = (self.g * star.m / radius).sqrt();
            // Perpendicular to the radius vector, in the disk plane
            let v = speed * offset.cross(&plane_normal).normalize();

            registry.add_planet(self.planet_mass, self.planet_radius, x, v);
        }
    }
}
