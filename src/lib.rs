pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodyKind, NVec3, Registry, RegistryEvent};
pub use simulation::forces::{Force, ForceMap, ForceSet, NewtonianGravity};
pub use simulation::collisions::{detect_collisions, resolve_collisions, CollisionEvent, MergeStats};
pub use simulation::sampler::DiskSampler;
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::{run_headless, run_headless_with, step, RunSummary, StepOutcome};
pub use simulation::scenario::Scenario;
pub use simulation::params::Parameters;

pub use configuration::config::{DiskConfig, ParametersConfig, ScenarioConfig, StarConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
