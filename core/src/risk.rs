//! Risk scoring and status classification.
//!
//! Risk is a pure function of the live metrics. It is recomputed on
//! every read and never written back to zone state.

use crate::store::ZoneState;
use serde::{Deserialize, Serialize};

/// Metric weights in the risk formula.
pub const TRAFFIC_WEIGHT: f64 = 0.6;
pub const COMPLAINT_WEIGHT: f64 = 0.4;

/// Status thresholds on the rounded score, both strictly greater-than.
pub const HIGH_RISK_SCORE: i64 = 100;
pub const MEDIUM_RISK_SCORE: i64 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Normal,
    Medium,
    High,
}

impl RiskStatus {
    /// Operator-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Medium => "Medium",
            Self::High => "High Risk",
        }
    }
}

/// Display values derived from one zone's current metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedView {
    pub risk_score: i64,
    pub status:     RiskStatus,
}

/// The unrounded weighted risk. Auto-control thresholds on this value;
/// the displayed score rounds it to the nearest integer.
pub fn risk_raw(traffic: i64, complaints: i64) -> f64 {
    TRAFFIC_WEIGHT * traffic as f64 + COMPLAINT_WEIGHT * complaints as f64
}

/// Classify one zone's current state.
pub fn classify(zone: &ZoneState) -> DerivedView {
    let risk_score = risk_raw(zone.traffic, zone.complaints).round() as i64;
    let status = if risk_score > HIGH_RISK_SCORE {
        RiskStatus::High
    } else if risk_score > MEDIUM_RISK_SCORE {
        RiskStatus::Medium
    } else {
        RiskStatus::Normal
    };
    DerivedView { risk_score, status }
}
