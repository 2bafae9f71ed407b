//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through the one SimRng handle seeded from the
//! run's master seed, and every stochastic operation takes it explicitly.
//! Fixing the seed therefore fixes the entire trajectory.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The single deterministic RNG stream for a run.
pub struct SimRng {
    inner: Pcg64Mcg,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an i64 in [lo, hi).
    pub fn next_i64_in(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo < hi, "range must be non-empty");
        lo + self.next_u64_below((hi - lo) as u64) as i64
    }
}

/// A discrete distribution stored as (value, cumulative probability) rows.
///
/// Sampling is inverse-CDF: one uniform draw in [0, 1), resolved to the
/// first row whose cumulative bound exceeds it. Rows must be in ascending
/// bound order and the last bound must be exactly 1.0.
pub struct WeightedTable {
    rows: &'static [(i64, f64)],
}

impl WeightedTable {
    /// Tables carry at least one row; const tables that break this fail
    /// their compile-time evaluation.
    pub const fn new(rows: &'static [(i64, f64)]) -> Self {
        assert!(!rows.is_empty(), "a weighted table needs at least one row");
        Self { rows }
    }

    /// Resolve a uniform draw u in [0.0, 1.0) against the table.
    pub fn pick(&self, u: f64) -> i64 {
        for &(value, bound) in self.rows {
            if u < bound {
                return value;
            }
        }
        // Unreachable for u < 1.0 when the last bound is 1.0; the last
        // row still absorbs any caller handing in exactly 1.0.
        self.rows[self.rows.len() - 1].0
    }

    /// Draw one value, consuming exactly one uniform from the stream.
    pub fn sample(&self, rng: &mut SimRng) -> i64 {
        self.pick(rng.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: WeightedTable = WeightedTable::new(&[
        (-6, 0.10),
        (-3, 0.30),
        (0, 0.60),
        (3, 0.85),
        (6, 1.00),
    ]);

    #[test]
    fn pick_resolves_each_cumulative_band() {
        assert_eq!(TABLE.pick(0.0), -6);
        assert_eq!(TABLE.pick(0.09), -6);
        assert_eq!(TABLE.pick(0.10), -3);
        assert_eq!(TABLE.pick(0.29), -3);
        assert_eq!(TABLE.pick(0.30), 0);
        assert_eq!(TABLE.pick(0.59), 0);
        assert_eq!(TABLE.pick(0.60), 3);
        assert_eq!(TABLE.pick(0.84), 3);
        assert_eq!(TABLE.pick(0.85), 6);
        assert_eq!(TABLE.pick(0.999), 6);
    }

    #[test]
    fn pick_absorbs_a_full_unit_draw() {
        assert_eq!(TABLE.pick(1.0), 6);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn empty_tables_are_rejected_at_construction() {
        let _ = WeightedTable::new(&[]);
    }

    #[test]
    fn same_seed_yields_the_same_stream() {
        let mut a = SimRng::seed_from_u64(17);
        let mut b = SimRng::seed_from_u64(17);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn next_f64_stays_in_the_unit_interval() {
        let mut rng = SimRng::seed_from_u64(3);
        for _ in 0..1000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u), "draw {u} escaped [0, 1)");
        }
    }

    #[test]
    fn next_i64_in_covers_only_the_half_open_range() {
        let mut rng = SimRng::seed_from_u64(8);
        for _ in 0..1000 {
            let v = rng.next_i64_in(80, 140);
            assert!((80..140).contains(&v), "draw {v} escaped [80, 140)");
        }
    }
}
