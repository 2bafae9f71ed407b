//! The simulation engine, the heart of the zone simulator.
//!
//! STEP ORDER (fixed, documented, never reordered):
//!   1. Policy selector decides the flags from PRE-tick state.
//!   2. Tick engine drifts every zone under those flags.
//!   3. Risk is derived on demand from the post-tick metrics.
//!
//! RULES:
//!   - Zones advance in roster order, every tick.
//!   - Per zone: traffic draw, then complaints, then relief if damped.
//!   - All randomness flows through the engine's SimRng.
//!   - Nothing outside this crate mutates zone state directly.

use crate::{
    clock::SimClock,
    config::SimConfig,
    drift,
    error::{SimError, SimResult},
    policy::{self, Mode},
    risk,
    rng::SimRng,
    snapshot::{CitySummary, StateSnapshot, ZoneSnapshot},
    store::ZoneStore,
};

pub struct SimEngine {
    pub clock: SimClock,
    rng:       SimRng,
    store:     ZoneStore,
    mode:      Mode,
}

impl SimEngine {
    /// Build an engine with freshly drawn zone metrics. The same seed
    /// and roster reproduce the same trajectory exactly.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = SimRng::seed_from_u64(seed);
        let store = ZoneStore::init_random(&config, &mut rng);
        log::debug!("engine initialized: zones={} seed={seed}", store.len());
        Self {
            clock: SimClock::new(),
            rng,
            store,
            mode: Mode::Manual,
        }
    }

    /// Engine over the reference five-zone roster. Used by tests.
    pub fn build_test(seed: u64) -> Self {
        Self::new(SimConfig::default_test(), seed)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the active policy. Entering NoIntervention drops every
    /// signal immediately; other switches leave the flags alone until
    /// the next step applies the new policy.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if mode == Mode::NoIntervention {
            self.store.clear_signals();
        }
        log::debug!("mode set to {}", mode.label());
    }

    /// Operator flag writes, only honored under Manual. Every name is
    /// validated before any flag is touched, so a bad batch changes
    /// nothing.
    pub fn set_manual_flags(&mut self, flags: &[(String, bool)]) -> SimResult<()> {
        if self.mode != Mode::Manual {
            return Err(SimError::InvalidMode {
                given: self.mode.label().to_string(),
            });
        }
        for (name, _) in flags {
            if !self.store.contains(name) {
                return Err(SimError::InvalidZone { name: name.clone() });
            }
        }
        for (name, active) in flags {
            self.store.set_signal(name, *active)?;
        }
        Ok(())
    }

    /// Run n steps (policy, then tick) and return the resulting state.
    /// step(n) is exactly n calls to step(1); step(0) is a plain read.
    pub fn step(&mut self, n: u64) -> StateSnapshot {
        for _ in 0..n {
            let flags = policy::select_flags(self.mode, self.store.zones());
            self.store.set_signals(&flags);
            self.tick();
        }
        self.state()
    }

    /// Advance every zone one tick under the currently applied flags.
    fn tick(&mut self) {
        let tick = self.clock.advance();
        for zone in self.store.zones_mut() {
            let mut delta = drift::sample_drift(&mut self.rng);
            if zone.signal_active {
                delta = drift::dampen(delta, &mut self.rng);
            }
            zone.apply_drift(delta);

            let view = risk::classify(zone);
            log::debug!(
                "tick={tick} zone={} traffic={} complaints={} risk={} status={} signal={}",
                zone.name,
                zone.traffic,
                zone.complaints,
                view.risk_score,
                view.status.label(),
                zone.signal_active,
            );
        }
    }

    /// The ordered state view the presentation layer renders.
    pub fn state(&self) -> StateSnapshot {
        let zones: Vec<ZoneSnapshot> = self
            .store
            .zones()
            .iter()
            .map(ZoneSnapshot::from_state)
            .collect();
        let summary = CitySummary::from_rows(&zones);
        StateSnapshot {
            tick: self.clock.current_tick,
            mode: self.mode,
            zones,
            summary,
        }
    }

    pub fn zone_count(&self) -> usize {
        self.store.len()
    }
}
