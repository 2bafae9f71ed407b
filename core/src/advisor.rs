//! Rule-based city planner.
//!
//! Produces per-zone recommendations and the mode-dependent outcome line
//! for what-if runs. Everything here reads classified snapshot rows;
//! nothing mutates simulation state.

use crate::{
    policy::Mode,
    risk::{HIGH_RISK_SCORE, MEDIUM_RISK_SCORE},
    snapshot::ZoneSnapshot,
    types::ZoneName,
};
use serde::{Deserialize, Serialize};

/// Distinct recommendation types, one per planner rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    ActivateSignals,
    MonitorImpact,
    PrepareIntervention,
    Stable,
}

impl AdviceKind {
    /// Urgency on a 1 to 5 scale; 5 means act now.
    pub fn priority(&self) -> u8 {
        match self {
            Self::ActivateSignals => 5,
            Self::MonitorImpact => 4,
            Self::PrepareIntervention => 3,
            Self::Stable => 1,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ActivateSignals => {
                "HIGH risk. Recommend activating smart signals + deploying crews."
            }
            Self::MonitorImpact => "Smart signals active. Monitoring impact.",
            Self::PrepareIntervention => "Rising risk. Prepare intervention.",
            Self::Stable => "Stable.",
        }
    }
}

/// One planner recommendation for one zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneAdvice {
    pub zone:     ZoneName,
    pub kind:     AdviceKind,
    pub priority: u8,
    pub message:  String,
}

/// Evaluate the planner rules against every zone row, in roster order.
/// Rules are checked top down; the first match wins.
pub fn planner_advice(rows: &[ZoneSnapshot]) -> Vec<ZoneAdvice> {
    rows.iter()
        .map(|row| {
            let kind = if row.risk_score > HIGH_RISK_SCORE && !row.signal_active {
                AdviceKind::ActivateSignals
            } else if row.risk_score > HIGH_RISK_SCORE {
                AdviceKind::MonitorImpact
            } else if row.risk_score > MEDIUM_RISK_SCORE {
                AdviceKind::PrepareIntervention
            } else {
                AdviceKind::Stable
            };
            ZoneAdvice {
                zone:     row.zone.clone(),
                kind,
                priority: kind.priority(),
                message:  kind.message().to_string(),
            }
        })
        .collect()
}

/// Mode-dependent summary of where the city stands after a what-if run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatIfOutcome {
    pub mode:            Mode,
    pub high_risk_zones: usize,
    pub message:         String,
}

pub fn what_if_outcome(mode: Mode, rows: &[ZoneSnapshot]) -> WhatIfOutcome {
    let high_risk_zones = rows.iter().filter(|r| r.risk_score > HIGH_RISK_SCORE).count();
    let message = match mode {
        Mode::NoIntervention => {
            format!("Without intervention: {high_risk_zones} zones in high-risk condition")
        }
        Mode::AutoControl => {
            format!("With AI intervention: {high_risk_zones} zones in high-risk condition")
        }
        Mode::Manual => "Live control mode: human operators in charge".to_string(),
    };
    WhatIfOutcome {
        mode,
        high_risk_zones,
        message,
    }
}
