//! Per-tick metric drift and the smart-signal damping effect.
//!
//! Both metrics move by values drawn from fixed discrete tables, one
//! uniform draw per table per zone per tick. Draw order never changes:
//! traffic before complaints, natural drift before damping.

use crate::rng::{SimRng, WeightedTable};

/// Natural traffic movement per tick.
const TRAFFIC_DRIFT: WeightedTable = WeightedTable::new(&[
    (-6, 0.10),
    (-3, 0.30),
    (0, 0.60),
    (3, 0.85),
    (6, 1.00),
]);

/// Natural complaint movement per tick.
const COMPLAINT_DRIFT: WeightedTable = WeightedTable::new(&[
    (-4, 0.15),
    (-2, 0.40),
    (0, 0.70),
    (2, 0.90),
    (4, 1.00),
]);

/// Traffic relief while a smart signal is active.
const SIGNAL_TRAFFIC_RELIEF: WeightedTable =
    WeightedTable::new(&[(4, 0.40), (6, 0.80), (8, 1.00)]);

/// Complaint relief while a smart signal is active.
const SIGNAL_COMPLAINT_RELIEF: WeightedTable =
    WeightedTable::new(&[(2, 0.50), (3, 0.80), (4, 1.00)]);

/// One tick's worth of metric movement for a single zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftDelta {
    pub traffic:    i64,
    pub complaints: i64,
}

/// Sample the natural drift for one zone for one tick.
pub fn sample_drift(rng: &mut SimRng) -> DriftDelta {
    DriftDelta {
        traffic:    TRAFFIC_DRIFT.sample(rng),
        complaints: COMPLAINT_DRIFT.sample(rng),
    }
}

/// Subtract the smart-signal relief from an already-sampled drift.
/// Called only for zones whose signal is active; the relief stacks on
/// the natural drift, it never replaces it.
pub fn dampen(delta: DriftDelta, rng: &mut SimRng) -> DriftDelta {
    DriftDelta {
        traffic:    delta.traffic - SIGNAL_TRAFFIC_RELIEF.sample(rng),
        complaints: delta.complaints - SIGNAL_COMPLAINT_RELIEF.sample(rng),
    }
}
