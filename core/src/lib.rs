//! smartcity-core: deterministic simulation core for the city zone
//! control desk.
//!
//! The core owns all state and rules: per-tick stochastic drift,
//! smart-signal damping, the three control policies, risk scoring, and
//! the planner recommendations. Presentation lives in the city-runner
//! binary, which only calls the public operations exposed here and
//! renders the snapshots it gets back.

pub mod advisor;
pub mod clock;
pub mod config;
pub mod drift;
pub mod engine;
pub mod error;
pub mod policy;
pub mod risk;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod types;

pub use config::SimConfig;
pub use engine::SimEngine;
pub use error::{SimError, SimResult};
pub use policy::Mode;
pub use snapshot::StateSnapshot;
