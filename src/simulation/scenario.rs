//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle consumed by the step loop:
//! - numerical parameters (`Parameters`)
//! - body registry (`Registry` with the star and the sampled disk at t = 0)
//! - active force set (`ForceSet` with Newtonian gravity registered)
//!
//! Configuration is validated here, before any bodies are created; an
//! invalid scenario never reaches the simulation loop.

use anyhow::{ensure, Result};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::sampler::DiskSampler;
use crate::simulation::states::{NVec3, Registry};

/// Fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters, the body registry at t = 0, and the set
/// of active force laws. The step loop and the CLI runner both consume it.
pub struct Scenario {
    pub parameters: Parameters,
    pub registry: Registry,
    pub forces: ForceSet,
}

impl Scenario {
    /// Validate `cfg` and build the initial system: star plus sampled
    /// planetary disk. Fails fast on invalid configuration; once this
    /// returns `Ok`, nothing in the step loop is fatal.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = &cfg.parameters;
        ensure!(p_cfg.h0 > 0.0, "step size h0 must be positive, got {}", p_cfg.h0);
        ensure!(p_cfg.t_end >= 0.0, "t_end must be non-negative, got {}", p_cfg.t_end);
        ensure!(p_cfg.g > 0.0, "gravitational constant must be positive, got {}", p_cfg.g);

        let s_cfg = &cfg.star;
        ensure!(s_cfg.mass > 0.0, "star mass must be positive, got {}", s_cfg.mass);
        ensure!(s_cfg.radius > 0.0, "star radius must be positive, got {}", s_cfg.radius);
        ensure!(
            s_cfg.position.len() == 3,
            "star position must have 3 components, got {}",
            s_cfg.position.len()
        );

        let d_cfg = &cfg.disk;
        ensure!(
            d_cfg.number_of_planets >= 1,
            "number_of_planets must be at least 1, got {}",
            d_cfg.number_of_planets
        );
        ensure!(
            d_cfg.min_radius > 0.0,
            "disk min_radius must be positive, got {}",
            d_cfg.min_radius
        );
        ensure!(
            d_cfg.max_radius >= d_cfg.min_radius,
            "disk max_radius {} is below min_radius {}",
            d_cfg.max_radius,
            d_cfg.min_radius
        );
        ensure!(
            d_cfg.planet_mass > 0.0,
            "planet mass must be positive, got {}",
            d_cfg.planet_mass
        );
        ensure!(
            d_cfg.planet_radius > 0.0,
            "planet radius must be positive, got {}",
            d_cfg.planet_radius
        );

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            seed: p_cfg.seed,
            G: p_cfg.g,
        };

        // Star at rest (or configured velocity) at the disk center
        let star_x = NVec3::new(s_cfg.position[0], s_cfg.position[1], s_cfg.position[2]);
        let mut registry = Registry::with_star(s_cfg.mass, s_cfg.radius, star_x, NVec3::zeros());

        // Planets: seeded disk sampling around the star
        let sampler = DiskSampler {
            min_radius: d_cfg.min_radius,
            max_radius: d_cfg.max_radius,
            planet_mass: d_cfg.planet_mass,
            planet_radius: d_cfg.planet_radius,
            g: parameters.G,
        };
        let mut rng = ChaChaRng::seed_from_u64(parameters.seed);
        sampler.sample_planets(&mut registry, d_cfg.number_of_planets, &mut rng);

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity { G: parameters.G });

        Ok(Self {
            parameters,
            registry,
            forces,
        })
    }
}
