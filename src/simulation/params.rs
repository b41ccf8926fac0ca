//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - gravitational constant `G`,
//! - random seed for disk sampling

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub seed: u64, // deterministic seed
    pub G: f64, // gravitational constant
}
