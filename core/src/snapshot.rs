//! Snapshot serialization: the read model the presentation layer renders.
//!
//! A snapshot is recomputed from live state on every request. The
//! simulator keeps no history, so snapshots are never stored or replayed.

use crate::{
    policy::Mode,
    risk::{self, RiskStatus, HIGH_RISK_SCORE},
    store::ZoneState,
    types::{Tick, ZoneName},
};
use serde::{Deserialize, Serialize};

/// One zone's row in the state table, metrics plus derived risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    pub zone:          ZoneName,
    pub traffic:       i64,
    pub complaints:    i64,
    pub signal_active: bool,
    pub risk_score:    i64,
    pub status:        RiskStatus,
}

impl ZoneSnapshot {
    pub fn from_state(zone: &ZoneState) -> Self {
        let view = risk::classify(zone);
        Self {
            zone:          zone.name.clone(),
            traffic:       zone.traffic,
            complaints:    zone.complaints,
            signal_active: zone.signal_active,
            risk_score:    view.risk_score,
            status:        view.status,
        }
    }
}

/// City-wide aggregates over the current zone rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CitySummary {
    /// Mean traffic across zones, truncated to an integer.
    pub avg_traffic: i64,
    /// Mean complaints across zones, truncated to an integer.
    pub avg_complaints: i64,
    /// Zones whose risk score exceeds the high threshold.
    pub high_risk_zones: usize,
}

impl CitySummary {
    pub fn from_rows(rows: &[ZoneSnapshot]) -> Self {
        if rows.is_empty() {
            return Self {
                avg_traffic:     0,
                avg_complaints:  0,
                high_risk_zones: 0,
            };
        }
        let n = rows.len() as i64;
        Self {
            avg_traffic:     rows.iter().map(|r| r.traffic).sum::<i64>() / n,
            avg_complaints:  rows.iter().map(|r| r.complaints).sum::<i64>() / n,
            high_risk_zones: rows.iter().filter(|r| r.risk_score > HIGH_RISK_SCORE).count(),
        }
    }
}

/// The full state view returned by the engine's read operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick:    Tick,
    pub mode:    Mode,
    pub zones:   Vec<ZoneSnapshot>,
    pub summary: CitySummary,
}
