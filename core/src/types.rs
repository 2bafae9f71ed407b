//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick covers five in-city minutes.
pub type Tick = u64;

/// The display name of a zone, unique within the configured roster.
pub type ZoneName = String;
