use rand::Rng;
use rand::rngs::StdRng;
use tracing::warn;

use super::{Floor, Lift, LiftObserver, Passenger};

/// A building with one car and a floor-indexed set of waiting queues.
///
/// The simulation is synchronous: [`Building::run`] drives the car's state
/// machine until every seeded passenger has been delivered.
#[derive(Clone, Debug)]
pub struct Building {
    floor_count: u32,
    capacity: u32,
    floors: Vec<Floor>,
    lift: Lift,
    total_seeded: u32,
}

impl Building {
    pub fn new(floor_count: u32, capacity: u32) -> Self {
        Self {
            floor_count,
            capacity,
            floors: (1..=floor_count).map(Floor::new).collect(),
            lift: Lift::new(1, floor_count, capacity, "Lift-1"),
            total_seeded: 0,
        }
    }

    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    pub fn lift(&self) -> &Lift {
        &self.lift
    }

    pub fn total_seeded(&self) -> u32 {
        self.total_seeded
    }

    /// Queue a passenger on their source floor and request the pickup.
    pub fn add_passenger(&mut self, passenger: Passenger) {
        let idx = (passenger.source_floor - 1) as usize;
        self.floors[idx].add_new(passenger);
        self.lift.request_pickup(passenger.source_floor);
        self.total_seeded += 1;
    }

    /// Seed `count` passengers with random weights, sources, and destinations.
    ///
    /// Weights are drawn from 50..170 and redrawn until they fit the car, as
    /// in the original simulator; destination always differs from source.
    pub fn seed_passengers(&mut self, count: u32, rng: &mut StdRng) {
        for _ in 0..count {
            let source = rng.gen_range(1..=self.floor_count);
            let destination = loop {
                let d = rng.gen_range(1..=self.floor_count);
                if d != source {
                    break d;
                }
            };
            let weight = if self.capacity >= 50 {
                loop {
                    let w = rng.gen_range(50..170);
                    if w <= self.capacity {
                        break w;
                    }
                }
            } else {
                rng.gen_range(1..=self.capacity.max(1))
            };
            self.add_passenger(Passenger::new(weight, source, destination));
        }
    }

    /// Run the car until it has delivered everyone and gone idle.
    pub fn run(&mut self, observer: &mut impl LiftObserver) {
        self.lift.start(observer);

        // Hard cap on transitions so a degenerate configuration cannot hang
        // the sweep; six transitions per stop is the state machine's cycle.
        let max_steps =
            (u64::from(self.total_seeded) + 1) * u64::from(self.floor_count).max(1) * 64 + 256;

        for _ in 0..max_steps {
            if !self.lift.step(&mut self.floors, observer) {
                return;
            }
        }
        warn!(
            floors = self.floor_count,
            capacity = self.capacity,
            passengers = self.total_seeded,
            "simulation step cap reached before the lift went idle"
        );
    }

    /// Average floors travelled per delivered passenger; 0 when nobody alighted.
    pub fn cost(&self) -> f64 {
        let alighted = self.lift.total_alighted();
        if alighted == 0 {
            return 0.0;
        }
        f64::from(self.lift.total_moves()) / f64::from(alighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::LiftMode;
    use rand::SeedableRng;

    struct BoundsObserver {
        min_floor: u32,
        max_floor: u32,
        out_of_bounds: bool,
    }

    impl LiftObserver for BoundsObserver {
        fn door_opened(&mut self, _name: &str, floor: u32) {
            if floor < self.min_floor || floor > self.max_floor {
                self.out_of_bounds = true;
            }
        }
    }

    struct Noop;
    impl LiftObserver for Noop {}

    #[test]
    fn delivers_every_seeded_passenger() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut building = Building::new(12, 500);
        building.seed_passengers(40, &mut rng);

        building.run(&mut Noop);

        assert_eq!(building.lift().total_alighted(), 40);
        assert_eq!(building.lift().total_boarded(), 40);
        assert!(building.lift().is_idle());
        assert_eq!(building.lift().mode(), LiftMode::Wait);
    }

    #[test]
    fn car_stays_within_the_building() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut building = Building::new(8, 300);
        building.seed_passengers(25, &mut rng);

        let mut obs = BoundsObserver {
            min_floor: 1,
            max_floor: 8,
            out_of_bounds: false,
        };
        building.run(&mut obs);
        assert!(!obs.out_of_bounds);
    }

    #[test]
    fn cost_is_positive_after_deliveries() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut building = Building::new(10, 750);
        building.seed_passengers(15, &mut rng);
        building.run(&mut Noop);

        assert!(building.cost() > 0.0);
        let expected = f64::from(building.lift().total_moves())
            / f64::from(building.lift().total_alighted());
        assert_eq!(building.cost(), expected);
    }

    #[test]
    fn cost_is_zero_with_no_passengers() {
        let mut building = Building::new(5, 500);
        building.run(&mut Noop);
        assert_eq!(building.cost(), 0.0);
    }

    #[test]
    fn identical_seeds_give_identical_runs() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut building = Building::new(15, 600);
            building.seed_passengers(30, &mut rng);
            building.run(&mut Noop);
            (building.cost(), building.lift().total_moves())
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn seeded_passengers_fit_the_car() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut building = Building::new(6, 55);
        building.seed_passengers(10, &mut rng);
        building.run(&mut Noop);
        // Capacity 55 only admits weights in 50..=55; everyone still arrives.
        assert_eq!(building.lift().total_alighted(), 10);
    }
}
