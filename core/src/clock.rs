//! Simulation clock. Owns the tick counter and the tick-to-minutes scale.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

/// Simulated minutes covered by one tick.
pub const TICK_MINUTES: u64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimClock {
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Advance one tick. Returns the new tick number.
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        self.current_tick
    }

    /// Simulated minutes elapsed since the run started.
    pub fn sim_minutes(&self) -> u64 {
        self.current_tick * TICK_MINUTES
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
