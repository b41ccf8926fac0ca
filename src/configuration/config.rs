//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! an accretion disk scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`StarConfig`]       – the central star
//! - [`DiskConfig`]       – the randomized planetary disk
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 50.0             # total simulation time
//!   h0: 0.005               # fixed step size
//!   g: 1.0                  # gravitational constant
//!   seed: 42                # deterministic seed
//!
//! star:
//!   mass: 1000.0
//!   radius: 1.0
//!   position: [ 0.0, 0.0, 0.0 ]
//!
//! disk:
//!   number_of_planets: 40
//!   min_radius: 5.0         # inner edge of the annulus
//!   max_radius: 20.0        # outer edge of the annulus
//!   planet_mass: 1.0
//!   planet_radius: 0.1
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation and validates it before any bodies are created.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64,    // time step size
    pub g: f64,     // gravitational constant (tunable, not the SI value)
    pub seed: u64,  // deterministic seed to make runs reproducible
}

/// The central star's initial state
#[derive(Deserialize, Debug)]
pub struct StarConfig {
    pub mass: f64,          // star mass, dominant over any planet
    pub radius: f64,        // contact radius for absorption
    pub position: Vec<f64>, // disk center, 3 components
}

/// Randomized planetary disk parameters
#[derive(Deserialize, Debug)]
pub struct DiskConfig {
    pub number_of_planets: usize, // how many planets to sample
    pub min_radius: f64,          // inner annulus edge, > 0
    pub max_radius: f64,          // outer annulus edge, >= min_radius
    pub planet_mass: f64,         // per-planet mass
    pub planet_radius: f64,       // per-planet contact radius
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub star: StarConfig,             // the central star
    pub disk: DiskConfig,             // the randomized planetary disk
}
