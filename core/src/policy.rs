//! Intervention policy: which authority decides the smart-signal flags.

use crate::{
    error::{SimError, SimResult},
    risk,
    store::ZoneState,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unrounded risk above which auto-control switches a zone's signal on.
pub const SIGNAL_RISK_THRESHOLD: f64 = 100.0;

/// The three control policies. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Operator-chosen flags pass through untouched.
    Manual,
    /// Every flag forced off.
    NoIntervention,
    /// Flags follow the pre-tick risk threshold.
    AutoControl,
}

impl Mode {
    /// Operator-facing label, as shown by the control surface.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "Live Control",
            Self::NoIntervention => "Do Nothing",
            Self::AutoControl => "AI Auto-Control",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s {
            "manual" => Ok(Self::Manual),
            "no_intervention" => Ok(Self::NoIntervention),
            "auto_control" => Ok(Self::AutoControl),
            other => Err(SimError::InvalidMode {
                given: other.to_string(),
            }),
        }
    }
}

/// Decide the flags a tick will run under, from PRE-tick state, parallel
/// to roster order.
///
/// Manual is the identity over whatever the operator set. Auto-control
/// thresholds the unrounded risk of each zone, so its output depends on
/// the metrics alone, never on the prior flags.
pub fn select_flags(mode: Mode, zones: &[ZoneState]) -> Vec<bool> {
    match mode {
        Mode::Manual => zones.iter().map(|z| z.signal_active).collect(),
        Mode::NoIntervention => vec![false; zones.len()],
        Mode::AutoControl => zones
            .iter()
            .map(|z| risk::risk_raw(z.traffic, z.complaints) > SIGNAL_RISK_THRESHOLD)
            .collect(),
    }
}
