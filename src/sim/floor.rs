use std::collections::VecDeque;

use super::Passenger;

/// One floor of the building: a FIFO queue of passengers waiting to board.
#[derive(Clone, Debug)]
pub struct Floor {
    number: u32,
    waiting: VecDeque<Passenger>,
}

impl Floor {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            waiting: VecDeque::new(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Queue a newly arrived passenger at the back.
    pub fn add_new(&mut self, passenger: Passenger) {
        self.waiting.push_back(passenger);
    }

    /// Return a passenger that was turned away from a full car; they keep
    /// their place at the head of the queue.
    pub fn add_return(&mut self, passenger: Passenger) {
        self.waiting.push_front(passenger);
    }

    /// Next passenger in line, if any.
    pub fn take_next(&mut self) -> Option<Passenger> {
        self.waiting.pop_front()
    }

    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returned_passenger_goes_to_the_front() {
        let mut floor = Floor::new(3);
        let a = Passenger::new(70, 3, 5);
        let b = Passenger::new(80, 3, 1);
        floor.add_new(a);
        floor.add_new(b);

        let first = floor.take_next().unwrap();
        assert_eq!(first, a);
        floor.add_return(first);

        assert_eq!(floor.take_next(), Some(a));
        assert_eq!(floor.take_next(), Some(b));
        assert_eq!(floor.take_next(), None);
    }
}
