use tracing::{debug, info, warn};

use crate::{
    neighbor::{AdjacentNeighbors, NeighborCounter, VisibleNeighbors},
    seat::{Seat, SeatMap},
    Error,
};

pub const DEFAULT_MAX_ROUNDS: usize = 1000;
pub const ADJACENT_OCCUPIED_THRESHOLD: usize = 4;
pub const VISIBLE_OCCUPIED_THRESHOLD: usize = 5;
pub const VISIBLE_MAX_ROUNDS: usize = 100;

/// Seats layout at equilibrium.
#[derive(Debug, Clone)]
pub struct Settled {
    pub map: SeatMap,
    pub rounds: usize,
    pub occupied: usize,
}

/// Applies the seating rule to every seat at once, round after round, until the
/// number of occupied seats stops changing.
#[derive(Debug, Clone)]
pub struct SeatingAutomaton<N> {
    counter: N,
    occupied_threshold: usize,
    max_rounds: usize,
}

impl SeatingAutomaton<AdjacentNeighbors> {
    pub fn adjacent() -> Self {
        Self::new(AdjacentNeighbors, ADJACENT_OCCUPIED_THRESHOLD)
    }
}

impl SeatingAutomaton<VisibleNeighbors> {
    pub fn visible() -> Self {
        Self::new(VisibleNeighbors, VISIBLE_OCCUPIED_THRESHOLD).with_max_rounds(VISIBLE_MAX_ROUNDS)
    }
}

impl<N: NeighborCounter> SeatingAutomaton<N> {
    /// `occupied_threshold` is the least count of occupied neighbors that makes
    /// an occupied seat empty. Panics if it is zero.
    pub fn new(counter: N, occupied_threshold: usize) -> Self {
        assert!(
            occupied_threshold >= 1,
            "occupied threshold must be at least 1"
        );
        Self {
            counter,
            occupied_threshold,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn occupied_threshold(&self) -> usize {
        self.occupied_threshold
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Occupied neighbor count of every seat in `map`, row-major.
    pub fn neighbor_counts(&self, map: &SeatMap) -> Vec<usize> {
        map.positions()
            .map(|pos| self.counter.count(map, &pos))
            .collect()
    }

    pub fn next_seat(&self, seat: Seat, neigh_occ_count: usize) -> Seat {
        match seat {
            Seat::Empty if neigh_occ_count == 0 => Seat::Occupied,
            Seat::Occupied if neigh_occ_count >= self.occupied_threshold => Seat::Empty,
            other => other,
        }
    }

    /// One round. Every count is taken from `map` before any new seat is decided.
    pub fn step(&self, map: &SeatMap) -> SeatMap {
        let counts = self.neighbor_counts(map);
        let seats = map
            .seats()
            .iter()
            .zip(counts)
            .map(|(seat, count)| self.next_seat(*seat, count))
            .collect();

        map.with_seats(seats)
    }

    /// Runs rounds until the occupied count equals the one of the round before.
    /// The count before round 1 is taken as 0, not the count of `initial`.
    pub fn settle(&self, initial: SeatMap) -> Result<Settled, Error> {
        let mut map = initial;
        let mut last_occupied = 0;
        for round in 1..=self.max_rounds {
            map = self.step(&map);
            let occupied = map.count(Seat::Occupied);
            debug!(round, occupied, "Applied seating round.");
            if occupied == last_occupied {
                info!(rounds = round, occupied, "Seats layout stabilized.");
                return Ok(Settled {
                    map,
                    rounds: round,
                    occupied,
                });
            }

            last_occupied = occupied;
        }

        warn!(
            max_rounds = self.max_rounds,
            "Seats layout doesn't stabilize within the round bound."
        );
        Err(Error::NotStabilized(self.max_rounds))
    }

    pub fn run(&self, initial: &SeatMap) -> Result<usize, Error> {
        self.settle(initial.clone()).map(|s| s.occupied)
    }
}
