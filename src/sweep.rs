//! Grid sweep over (capacity, floors, passengers) producing a [`CostTable`].
//!
//! One simulation per grid point; the default grid matches the generator that
//! produced the original cost table.

use error_stack::Report;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::sim::{Building, LiftObserver};
use crate::table::{CostRecord, CostTable};
use crate::{LiftGraphError, Result};

/// Inclusive range stepped from `min` towards `max`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SweepRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SweepRange {
    pub fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        (self.min..=self.max).step_by(self.step.max(1) as usize)
    }

    pub fn len(&self) -> usize {
        if self.min > self.max || self.step == 0 {
            return 0;
        }
        ((self.max - self.min) / self.step + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.step == 0 {
            return Err(Report::new(LiftGraphError)
                .attach_printable(format!("{name} range has a zero step")));
        }
        if self.min > self.max {
            return Err(Report::new(LiftGraphError).attach_printable(format!(
                "{name} range is inverted: {} > {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Sweep grid plus the RNG seed used for passenger placement.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SweepConfig {
    pub capacity: SweepRange,
    pub floors: SweepRange,
    pub passengers: SweepRange,
    pub seed: u64,
}

impl Default for SweepConfig {
    /// The grid the original cost table was generated with.
    fn default() -> Self {
        Self {
            capacity: SweepRange::new(500, 3000, 250),
            floors: SweepRange::new(5, 300, 5),
            passengers: SweepRange::new(5, 1000, 5),
            seed: 0,
        }
    }
}

impl SweepConfig {
    /// Total number of grid points.
    pub fn grid_size(&self) -> usize {
        self.capacity.len() * self.floors.len() * self.passengers.len()
    }

    pub fn validate(&self) -> Result<()> {
        self.capacity.validate("capacity")?;
        self.floors.validate("floors")?;
        self.passengers.validate("passengers")?;
        if self.floors.min < 2 {
            return Err(Report::new(LiftGraphError)
                .attach_printable("a building needs at least 2 floors")
                .attach_printable(format!("floors.min = {}", self.floors.min)));
        }
        Ok(())
    }
}

/// Run the sweep, producing one cost record per grid point.
pub fn run(config: &SweepConfig) -> Result<CostTable> {
    run_observed(config, &mut NoopObserver)
}

/// Like [`run`], but forwards every simulation event to `observer`.
pub fn run_observed(config: &SweepConfig, observer: &mut impl LiftObserver) -> Result<CostTable> {
    config.validate()?;

    let total = config.grid_size();
    info!(total, "starting cost sweep");

    let mut table = CostTable::new();
    let mut done = 0usize;

    for capacity in config.capacity.values() {
        for floors in config.floors.values() {
            // Per-cell RNG keyed off the sweep seed so any single cell can be
            // reproduced without replaying the whole grid.
            for passengers in config.passengers.values() {
                let cell_seed = config
                    .seed
                    .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                    .wrapping_add(cell_key(capacity, floors, passengers));
                let mut rng = StdRng::seed_from_u64(cell_seed);

                let mut building = Building::new(floors, capacity);
                building.seed_passengers(passengers, &mut rng);
                building.run(observer);

                table.insert(
                    capacity,
                    floors,
                    passengers,
                    CostRecord {
                        cost: building.cost(),
                        moves: building.lift().total_moves(),
                        served: building.lift().total_alighted(),
                    },
                );
                done += 1;
            }
            debug!(capacity, floors, done, total, "sweep progress");
        }
    }

    info!(leaves = table.len(), "sweep finished");
    Ok(table)
}

fn cell_key(capacity: u32, floors: u32, passengers: u32) -> u64 {
    (u64::from(capacity) << 40) ^ (u64::from(floors) << 20) ^ u64::from(passengers)
}

struct NoopObserver;
impl LiftObserver for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> SweepConfig {
        SweepConfig {
            capacity: SweepRange::new(500, 750, 250),
            floors: SweepRange::new(5, 10, 5),
            passengers: SweepRange::new(5, 15, 5),
            seed: 1,
        }
    }

    #[test]
    fn table_has_one_leaf_per_grid_point() {
        let config = tiny_config();
        let table = run(&config).unwrap();
        assert_eq!(table.len(), config.grid_size());
        assert_eq!(table.len(), 2 * 2 * 3);
    }

    #[test]
    fn every_grid_point_is_present() {
        let config = tiny_config();
        let table = run(&config).unwrap();
        for capacity in config.capacity.values() {
            for floors in config.floors.values() {
                for passengers in config.passengers.values() {
                    let record = table.get(capacity, floors, passengers).unwrap();
                    assert_eq!(record.served, passengers);
                    assert!(record.cost > 0.0);
                }
            }
        }
    }

    #[test]
    fn sweep_is_deterministic_for_a_seed() {
        let config = tiny_config();
        let a = run(&config).unwrap();
        let b = run(&config).unwrap();
        assert_eq!(a.flatten(), b.flatten());
    }

    #[test]
    fn range_len_matches_iteration() {
        for range in [
            SweepRange::new(500, 3000, 250),
            SweepRange::new(5, 300, 5),
            SweepRange::new(5, 1000, 5),
            SweepRange::new(3, 3, 1),
            SweepRange::new(1, 10, 4),
        ] {
            assert_eq!(range.len(), range.values().count());
        }
    }

    #[test]
    fn default_grid_matches_the_original_generator() {
        let config = SweepConfig::default();
        assert_eq!(config.capacity.len(), 11);
        assert_eq!(config.floors.len(), 60);
        assert_eq!(config.passengers.len(), 200);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let mut config = tiny_config();
        config.floors = SweepRange::new(1, 10, 5);
        assert!(run(&config).is_err());

        let mut config = tiny_config();
        config.passengers.step = 0;
        assert!(config.validate().is_err());

        let mut config = tiny_config();
        config.capacity = SweepRange::new(1000, 500, 250);
        assert!(config.validate().is_err());
    }
}
