use tracing::debug;

use super::{Floor, Passenger};

/// States of the car's door/travel cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiftMode {
    Wait,
    Up,
    Down,
    Open,
    Alight,
    Board,
    Close,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Seam for simulation events: moves, doors, boardings, alightings.
///
/// All methods default to no-ops so observers only implement what they need.
pub trait LiftObserver {
    fn started(&mut self, _name: &str) {}
    fn stopped(&mut self, _name: &str) {}
    fn moved_up(&mut self, _name: &str, _from: u32, _by: u32) {}
    fn moved_down(&mut self, _name: &str, _from: u32, _by: u32) {}
    fn door_opened(&mut self, _name: &str, _floor: u32) {}
    fn door_closed(&mut self, _name: &str, _floor: u32) {}
    fn boarded(&mut self, _name: &str, _floor: u32, _passenger: &Passenger) {}
    fn alighted(&mut self, _name: &str, _floor: u32, _passenger: &Passenger) {}
}

/// Observer that logs every event at debug level.
#[derive(Default)]
pub struct TraceObserver;

impl LiftObserver for TraceObserver {
    fn started(&mut self, name: &str) {
        debug!(lift = %name, "started");
    }
    fn stopped(&mut self, name: &str) {
        debug!(lift = %name, "stopped");
    }
    fn moved_up(&mut self, name: &str, from: u32, by: u32) {
        debug!(lift = %name, from, by, "moved up");
    }
    fn moved_down(&mut self, name: &str, from: u32, by: u32) {
        debug!(lift = %name, from, by, "moved down");
    }
    fn door_opened(&mut self, name: &str, floor: u32) {
        debug!(lift = %name, floor, "door opened");
    }
    fn door_closed(&mut self, name: &str, floor: u32) {
        debug!(lift = %name, floor, "door closed");
    }
    fn boarded(&mut self, name: &str, floor: u32, passenger: &Passenger) {
        debug!(lift = %name, floor, %passenger, "boarded");
    }
    fn alighted(&mut self, name: &str, floor: u32, passenger: &Passenger) {
        debug!(lift = %name, floor, %passenger, "alighted");
    }
}

/// The car: an explicit state machine over pickup and dropoff stops.
///
/// `arrive_floors` holds pending pickups, `depart_floors` pending dropoffs;
/// both stay sorted so the nearest stop in the travel direction is a scan.
#[derive(Clone, Debug)]
pub struct Lift {
    name: String,
    floor: u32,
    min_floor: u32,
    max_floor: u32,
    free_weight: u32,
    mode: LiftMode,
    direction: Direction,
    full: bool,
    passengers: Vec<Passenger>,
    arrive_floors: Vec<u32>,
    depart_floors: Vec<u32>,
    total_boarded: u32,
    total_alighted: u32,
    total_moves: u32,
}

impl Lift {
    pub fn new(min_floor: u32, max_floor: u32, capacity: u32, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            floor: min_floor,
            min_floor,
            max_floor,
            free_weight: capacity,
            mode: LiftMode::Wait,
            direction: Direction::Up,
            full: false,
            passengers: vec![],
            arrive_floors: vec![],
            depart_floors: vec![],
            total_boarded: 0,
            total_alighted: 0,
            total_moves: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_floor(&self) -> u32 {
        self.floor
    }

    pub fn mode(&self) -> LiftMode {
        self.mode
    }

    pub fn total_boarded(&self) -> u32 {
        self.total_boarded
    }

    pub fn total_alighted(&self) -> u32 {
        self.total_alighted
    }

    /// Total floors travelled.
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    /// Register a pickup request at `floor`.
    pub fn request_pickup(&mut self, floor: u32) {
        insert_sorted(&mut self.arrive_floors, floor);
    }

    /// No riders and no pending stops.
    pub fn is_idle(&self) -> bool {
        self.passengers.is_empty()
            && self.arrive_floors.is_empty()
            && self.depart_floors.is_empty()
    }

    pub fn start(&mut self, observer: &mut impl LiftObserver) {
        self.mode = LiftMode::Up;
        observer.started(&self.name);
    }

    /// Advance the state machine by one transition.
    ///
    /// Returns `false` once the car has stopped (all work done). `floors` must
    /// cover `min_floor..=max_floor` in order.
    pub fn step(&mut self, floors: &mut [Floor], observer: &mut impl LiftObserver) -> bool {
        match self.mode {
            LiftMode::Wait => {
                self.mode = LiftMode::Up;
            }

            LiftMode::Up => {
                if self.floor == self.max_floor {
                    self.direction = Direction::Down;
                    self.mode = LiftMode::Down;
                } else if let Some(target) = self.next_stop_above() {
                    self.travel_to(target, observer);
                    self.direction = Direction::Up;
                    self.mode = LiftMode::Open;
                } else if self.is_idle() {
                    self.mode = LiftMode::Wait;
                    observer.stopped(&self.name);
                    return false;
                } else {
                    // Pending work is below: sweep to the top, then scan down.
                    self.travel_to(self.max_floor, observer);
                    self.direction = Direction::Down;
                    self.mode = LiftMode::Down;
                }
            }

            LiftMode::Down => {
                if self.floor == self.min_floor {
                    self.direction = Direction::Up;
                    self.mode = LiftMode::Up;
                } else if let Some(target) = self.next_stop_below() {
                    self.travel_to(target, observer);
                    self.direction = Direction::Down;
                    self.mode = LiftMode::Open;
                } else if self.is_idle() {
                    self.mode = LiftMode::Wait;
                    observer.stopped(&self.name);
                    return false;
                } else {
                    self.travel_to(self.min_floor, observer);
                    self.direction = Direction::Up;
                    self.mode = LiftMode::Up;
                }
            }

            LiftMode::Open => {
                observer.door_opened(&self.name, self.floor);
                self.mode = LiftMode::Alight;
            }

            LiftMode::Alight => {
                let here = self.floor;
                let mut staying = Vec::with_capacity(self.passengers.len());
                for p in self.passengers.drain(..) {
                    if p.destination_floor == here {
                        self.free_weight += p.weight;
                        self.total_alighted += 1;
                        observer.alighted(&self.name, here, &p);
                    } else {
                        staying.push(p);
                    }
                }
                self.passengers = staying;
                remove_sorted(&mut self.depart_floors, here);
                self.mode = LiftMode::Board;
            }

            LiftMode::Board => {
                let idx = (self.floor - self.min_floor) as usize;
                if let Some(floor) = floors.get_mut(idx) {
                    while let Some(p) = floor.take_next() {
                        if p.weight > self.free_weight {
                            // Car is full: the passenger keeps their place in
                            // line and the pickup is re-requested.
                            floor.add_return(p);
                            insert_sorted(&mut self.arrive_floors, self.floor);
                            self.full = true;
                            break;
                        }
                        self.free_weight -= p.weight;
                        insert_sorted(&mut self.depart_floors, p.destination_floor);
                        self.total_boarded += 1;
                        observer.boarded(&self.name, self.floor, &p);
                        self.passengers.push(p);
                    }
                }
                self.mode = LiftMode::Close;
            }

            LiftMode::Close => {
                observer.door_closed(&self.name, self.floor);
                self.mode = if self.full {
                    LiftMode::Full
                } else {
                    match self.direction {
                        Direction::Up => LiftMode::Up,
                        Direction::Down => LiftMode::Down,
                    }
                };
            }

            LiftMode::Full => {
                // Drive to the nearest dropoff in the current direction to
                // free capacity; with none ahead, reverse and retry.
                let target = match self.direction {
                    Direction::Up => self
                        .depart_floors
                        .iter()
                        .copied()
                        .find(|&d| d > self.floor),
                    Direction::Down => self
                        .depart_floors
                        .iter()
                        .rev()
                        .copied()
                        .find(|&d| d < self.floor),
                };
                match target {
                    Some(t) => {
                        self.full = false;
                        self.travel_to(t, observer);
                        self.mode = LiftMode::Open;
                    }
                    None if self.depart_floors.is_empty() => {
                        self.full = false;
                        self.mode = match self.direction {
                            Direction::Up => LiftMode::Up,
                            Direction::Down => LiftMode::Down,
                        };
                    }
                    None => {
                        self.direction = match self.direction {
                            Direction::Up => Direction::Down,
                            Direction::Down => Direction::Up,
                        };
                    }
                }
            }
        }
        true
    }

    /// Move to `target`, counting floors travelled and clearing any pending
    /// pickup there (the doors are about to open anyway).
    fn travel_to(&mut self, target: u32, observer: &mut impl LiftObserver) {
        if target > self.floor {
            let by = target - self.floor;
            observer.moved_up(&self.name, self.floor, by);
            self.total_moves += by;
        } else if target < self.floor {
            let by = self.floor - target;
            observer.moved_down(&self.name, self.floor, by);
            self.total_moves += by;
        }
        self.floor = target;
        remove_sorted(&mut self.arrive_floors, target);
    }

    fn next_stop_above(&self) -> Option<u32> {
        let arrive = self
            .arrive_floors
            .iter()
            .copied()
            .find(|&f| f >= self.floor);
        let depart = self
            .depart_floors
            .iter()
            .copied()
            .find(|&f| f >= self.floor);
        match (arrive, depart) {
            (Some(a), Some(d)) => Some(a.min(d)),
            (a, d) => a.or(d),
        }
    }

    fn next_stop_below(&self) -> Option<u32> {
        let arrive = self
            .arrive_floors
            .iter()
            .rev()
            .copied()
            .find(|&f| f <= self.floor);
        let depart = self
            .depart_floors
            .iter()
            .rev()
            .copied()
            .find(|&f| f <= self.floor);
        match (arrive, depart) {
            (Some(a), Some(d)) => Some(a.max(d)),
            (a, d) => a.or(d),
        }
    }
}

fn insert_sorted(v: &mut Vec<u32>, x: u32) {
    if let Err(i) = v.binary_search(&x) {
        v.insert(i, x);
    }
}

fn remove_sorted(v: &mut Vec<u32>, x: u32) {
    if let Ok(i) = v.binary_search(&x) {
        v.remove(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopObserver;
    impl LiftObserver for NoopObserver {}

    fn run_to_completion(lift: &mut Lift, floors: &mut [Floor]) {
        let mut obs = NoopObserver;
        lift.start(&mut obs);
        for _ in 0..10_000 {
            if !lift.step(floors, &mut obs) {
                return;
            }
        }
        panic!("lift did not stop");
    }

    fn floors(n: u32) -> Vec<Floor> {
        (1..=n).map(Floor::new).collect()
    }

    #[test]
    fn delivers_a_single_passenger_and_stops() {
        let mut fl = floors(3);
        fl[0].add_new(Passenger::new(75, 1, 3));

        let mut lift = Lift::new(1, 3, 500, "Lift-1");
        lift.request_pickup(1);
        run_to_completion(&mut lift, &mut fl);

        assert_eq!(lift.total_boarded(), 1);
        assert_eq!(lift.total_alighted(), 1);
        assert_eq!(lift.total_moves(), 2);
        assert!(lift.is_idle());
    }

    #[test]
    fn full_car_returns_passenger_and_comes_back() {
        let mut fl = floors(3);
        fl[0].add_new(Passenger::new(70, 1, 3));
        fl[0].add_new(Passenger::new(80, 1, 2));

        // Only one passenger fits at a time.
        let mut lift = Lift::new(1, 3, 100, "Lift-1");
        lift.request_pickup(1);
        run_to_completion(&mut lift, &mut fl);

        assert_eq!(lift.total_boarded(), 2);
        assert_eq!(lift.total_alighted(), 2);
        // 1 -> 3 (drop 70), 3 -> 1 (pick up 80), 1 -> 2 (drop 80)
        assert_eq!(lift.total_moves(), 5);
        assert!(lift.is_idle());
    }

    #[test]
    fn serves_pickup_below_by_sweeping_and_scanning_down() {
        let mut fl = floors(5);
        fl[2].add_new(Passenger::new(60, 3, 1));

        let mut lift = Lift::new(1, 5, 500, "Lift-1");
        lift.request_pickup(3);
        run_to_completion(&mut lift, &mut fl);

        assert_eq!(lift.total_alighted(), 1);
        // 1 -> 3 (pick up), then the scan: 3 -> 5 sweep, 5 -> 1 (drop)
        assert_eq!(lift.total_moves(), 8);
    }

    #[test]
    fn picks_nearest_stop_in_travel_direction() {
        let mut fl = floors(10);
        fl[1].add_new(Passenger::new(60, 2, 9));
        fl[5].add_new(Passenger::new(60, 6, 8));

        let mut lift = Lift::new(1, 10, 500, "Lift-1");
        lift.request_pickup(2);
        lift.request_pickup(6);

        let mut obs = NoopObserver;
        lift.start(&mut obs);
        // Up from floor 1: first stop must be floor 2, not 6.
        while lift.mode() != LiftMode::Open {
            assert!(lift.step(&mut fl, &mut obs));
        }
        assert_eq!(lift.current_floor(), 2);
    }

    #[test]
    fn idle_lift_stops_without_moving() {
        let mut fl = floors(4);
        let mut lift = Lift::new(1, 4, 500, "Lift-1");
        run_to_completion(&mut lift, &mut fl);
        assert_eq!(lift.total_moves(), 0);
        assert_eq!(lift.current_floor(), 1);
    }
}
