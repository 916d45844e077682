use std::iter;

use crate::seat::{Direction, Position, Seat, SeatMap};

/// Counts occupied seats that the seat at `pos` takes into account.
pub trait NeighborCounter {
    fn count(&self, map: &SeatMap, pos: &Position) -> usize;
}

/// The eight touching seats. Outside of the map counts as nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentNeighbors;

impl NeighborCounter for AdjacentNeighbors {
    fn count(&self, map: &SeatMap, pos: &Position) -> usize {
        Direction::all()
            .iter()
            .filter_map(|dir| pos.along_dir(*dir))
            .filter(|p| map.seat(p) == Some(Seat::Occupied))
            .count()
    }
}

/// The first seat seen in each of the eight directions, looking over floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibleNeighbors;

impl VisibleNeighbors {
    fn first_seat(map: &SeatMap, pos: &Position, dir: Direction) -> Option<Seat> {
        iter::successors(pos.along_dir(dir), |p| p.along_dir(dir))
            .map_while(|p| map.seat(&p))
            .find(|s| *s != Seat::Floor)
    }
}

impl NeighborCounter for VisibleNeighbors {
    fn count(&self, map: &SeatMap, pos: &Position) -> usize {
        Direction::all()
            .iter()
            .filter(|dir| Self::first_seat(map, pos, **dir) == Some(Seat::Occupied))
            .count()
    }
}
