//! Nested cost table and its flattener.
//!
//! The table is a three-level ordered mapping: lift capacity -> floor count ->
//! passenger count -> cost record. The plotting path only ever reads it; the
//! sweep (or a JSON file produced by an earlier run) constructs it fully before
//! rendering starts.

use std::collections::BTreeMap;
use std::path::Path;

use bevy_math::Vec3;
use error_stack::ResultExt;
use serde::{Deserialize, Serialize};

use crate::{LiftGraphError, Result};

/// Leaf record of the cost table.
///
/// `cost` is the plotted scalar; the move and delivery counters it was derived
/// from ride along for inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub cost: f64,
    pub moves: u32,
    pub served: u32,
}

/// capacity -> floors -> passengers -> record
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CostTable(BTreeMap<u32, BTreeMap<u32, BTreeMap<u32, CostRecord>>>);

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, capacity: u32, floors: u32, passengers: u32, record: CostRecord) {
        self.0
            .entry(capacity)
            .or_default()
            .entry(floors)
            .or_default()
            .insert(passengers, record);
    }

    pub fn get(&self, capacity: u32, floors: u32, passengers: u32) -> Option<&CostRecord> {
        self.0.get(&capacity)?.get(&floors)?.get(&passengers)
    }

    /// Number of leaf records.
    pub fn len(&self) -> usize {
        self.0
            .values()
            .flat_map(|floors| floors.values())
            .map(|passengers| passengers.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate leaves as `(capacity, floors, passengers, record)`, ordered by
    /// capacity, then floors, then passengers.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u32, &CostRecord)> {
        self.0.iter().flat_map(|(&cap, floors)| {
            floors.iter().flat_map(move |(&fl, passengers)| {
                passengers.iter().map(move |(&pa, rec)| (cap, fl, pa, rec))
            })
        })
    }

    /// Flatten the three-level mapping into four aligned sequences.
    pub fn flatten(&self) -> CostPoints {
        let mut points = CostPoints::with_capacity(self.len());
        for (capacity, floors, passengers, record) in self.iter() {
            points.capacity.push(capacity as f32);
            points.floors.push(floors as f32);
            points.passengers.push(passengers as f32);
            points.cost.push(record.cost as f32);
        }
        points
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).change_context(LiftGraphError)?;
        std::fs::write(path, json)
            .change_context(LiftGraphError)
            .attach_printable_lazy(|| format!("failed to write cost table to {}", path.display()))
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .change_context(LiftGraphError)
            .attach_printable_lazy(|| format!("failed to read cost table from {}", path.display()))?;
        serde_json::from_str(&json).change_context(LiftGraphError)
    }
}

/// Four aligned sequences produced by [`CostTable::flatten`].
///
/// Index `i` across all four vectors describes one plotted point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostPoints {
    pub capacity: Vec<f32>,
    pub floors: Vec<f32>,
    pub passengers: Vec<f32>,
    pub cost: Vec<f32>,
}

impl CostPoints {
    fn with_capacity(n: usize) -> Self {
        Self {
            capacity: Vec::with_capacity(n),
            floors: Vec::with_capacity(n),
            passengers: Vec::with_capacity(n),
            cost: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.capacity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capacity.is_empty()
    }

    /// Point positions with x = capacity, y = floor count, z = passenger count.
    pub fn positions(&self) -> Vec<Vec3> {
        (0..self.len())
            .map(|i| Vec3::new(self.capacity[i], self.floors[i], self.passengers[i]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CostTable {
        let mut table = CostTable::new();
        table.insert(500, 5, 10, CostRecord { cost: 1.5, moves: 15, served: 10 });
        table.insert(500, 10, 10, CostRecord { cost: 2.25, moves: 45, served: 20 });
        table.insert(750, 5, 20, CostRecord { cost: 0.8, moves: 16, served: 20 });
        table
    }

    #[test]
    fn flatten_yields_one_point_per_leaf() {
        let table = sample_table();
        let points = table.flatten();
        assert_eq!(points.len(), table.len());
        assert_eq!(points.len(), 3);
        assert_eq!(points.capacity.len(), points.cost.len());
        assert_eq!(points.floors.len(), points.passengers.len());
    }

    #[test]
    fn flattened_tuples_match_source_entries() {
        let table = sample_table();
        let points = table.flatten();
        for i in 0..points.len() {
            let record = table
                .get(
                    points.capacity[i] as u32,
                    points.floors[i] as u32,
                    points.passengers[i] as u32,
                )
                .expect("flattened point must exist in the table");
            assert_eq!(points.cost[i], record.cost as f32);
        }
    }

    #[test]
    fn flatten_order_follows_key_order() {
        let points = sample_table().flatten();
        assert_eq!(points.capacity, vec![500.0, 500.0, 750.0]);
        assert_eq!(points.floors, vec![5.0, 10.0, 5.0]);
    }

    #[test]
    fn insert_overwrites_existing_leaf() {
        let mut table = sample_table();
        table.insert(500, 5, 10, CostRecord { cost: 9.0, moves: 90, served: 10 });
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(500, 5, 10).unwrap().cost, 9.0);
    }

    #[test]
    fn positions_use_capacity_floor_passenger_axes() {
        let points = sample_table().flatten();
        let xyz = points.positions();
        assert_eq!(xyz[0], Vec3::new(500.0, 5.0, 10.0));
        assert_eq!(xyz[2], Vec3::new(750.0, 5.0, 20.0));
    }

    #[test]
    fn json_round_trip_preserves_leaves() {
        let table = sample_table();
        let dir = std::env::temp_dir().join("liftgraph-table-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cost_table.json");

        table.save_json(&path).unwrap();
        let loaded = CostTable::load_json(&path).unwrap();

        assert_eq!(loaded.len(), table.len());
        assert_eq!(loaded.get(500, 10, 10), table.get(500, 10, 10));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_json_reports_missing_file() {
        assert!(CostTable::load_json("/nonexistent/liftgraph.json").is_err());
    }
}
