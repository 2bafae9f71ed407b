//! In-memory zone store.
//!
//! RULE: Only store.rs owns zone state. The engine mutates it through
//! the methods here; everything outside the crate reads snapshots.

use crate::{
    config::SimConfig,
    drift::DriftDelta,
    error::{SimError, SimResult},
    rng::SimRng,
    types::ZoneName,
};
use serde::{Deserialize, Serialize};

/// Hard bounds on the traffic index.
pub const TRAFFIC_MIN: i64 = 40;
pub const TRAFFIC_MAX: i64 = 200;

/// Hard bounds on the complaint count.
pub const COMPLAINTS_MIN: i64 = 0;
pub const COMPLAINTS_MAX: i64 = 150;

/// Half-open ranges the starting metrics are drawn from.
pub const INITIAL_TRAFFIC: (i64, i64) = (80, 140);
pub const INITIAL_COMPLAINTS: (i64, i64) = (20, 80);

/// Authoritative per-zone state. Risk never lives here; it is derived
/// from these metrics on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneState {
    pub name:          ZoneName,
    pub traffic:       i64,
    pub complaints:    i64,
    pub signal_active: bool,
}

impl ZoneState {
    /// Apply one tick's drift, saturating into the metric bounds.
    pub fn apply_drift(&mut self, delta: DriftDelta) {
        self.traffic = (self.traffic + delta.traffic).clamp(TRAFFIC_MIN, TRAFFIC_MAX);
        self.complaints =
            (self.complaints + delta.complaints).clamp(COMPLAINTS_MIN, COMPLAINTS_MAX);
    }
}

/// The full zone roster. Order is fixed at construction and is the
/// canonical order for every read, write, and random draw.
pub struct ZoneStore {
    zones: Vec<ZoneState>,
}

impl ZoneStore {
    /// Build the roster with uniformly drawn starting metrics. Draws run
    /// in roster order, traffic before complaints, so a fixed seed fixes
    /// the initial state.
    pub fn init_random(config: &SimConfig, rng: &mut SimRng) -> Self {
        let zones = config
            .zones
            .iter()
            .map(|name| ZoneState {
                name:          name.clone(),
                traffic:       rng.next_i64_in(INITIAL_TRAFFIC.0, INITIAL_TRAFFIC.1),
                complaints:    rng.next_i64_in(INITIAL_COMPLAINTS.0, INITIAL_COMPLAINTS.1),
                signal_active: false,
            })
            .collect();
        Self { zones }
    }

    pub fn zones(&self) -> &[ZoneState] {
        &self.zones
    }

    pub(crate) fn zones_mut(&mut self) -> &mut [ZoneState] {
        &mut self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.zones.iter().any(|z| z.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ZoneState> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Set one zone's smart-signal flag.
    pub(crate) fn set_signal(&mut self, name: &str, active: bool) -> SimResult<()> {
        match self.zones.iter_mut().find(|z| z.name == name) {
            Some(zone) => {
                zone.signal_active = active;
                Ok(())
            }
            None => Err(SimError::InvalidZone {
                name: name.to_string(),
            }),
        }
    }

    /// Overwrite every flag at once, parallel to roster order.
    pub(crate) fn set_signals(&mut self, flags: &[bool]) {
        debug_assert_eq!(flags.len(), self.zones.len());
        for (zone, &flag) in self.zones.iter_mut().zip(flags) {
            zone.signal_active = flag;
        }
    }

    pub(crate) fn clear_signals(&mut self) {
        for zone in &mut self.zones {
            zone.signal_active = false;
        }
    }
}
