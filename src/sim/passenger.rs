use serde::{Deserialize, Serialize};

/// A passenger waiting for, riding, or delivered by the lift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Passenger {
    pub weight: u32,
    pub source_floor: u32,
    pub destination_floor: u32,
}

impl Passenger {
    pub fn new(weight: u32, source_floor: u32, destination_floor: u32) -> Self {
        Self {
            weight,
            source_floor,
            destination_floor,
        }
    }
}

impl std::fmt::Display for Passenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Passenger {{ weight: {}, from: {}, to: {} }}",
            self.weight, self.source_floor, self.destination_floor
        )
    }
}
