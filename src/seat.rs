use std::{fmt::Display, str::FromStr};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Floor,
    Empty,
    Occupied,
}

impl TryFrom<char> for Seat {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Seat::Floor),
            'L' => Ok(Seat::Empty),
            '#' => Ok(Seat::Occupied),
            other => Err(Error::InvalidSeatSymbol(other)),
        }
    }
}

impl From<Seat> for char {
    fn from(value: Seat) -> Self {
        match value {
            Seat::Floor => '.',
            Seat::Empty => 'L',
            Seat::Occupied => '#',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRS: [Direction; 8] = [
            Direction::TopLeft,
            Direction::Top,
            Direction::TopRight,
            Direction::Left,
            Direction::Right,
            Direction::BottomLeft,
            Direction::Bottom,
            Direction::BottomRight,
        ];

        &ALL_DIRS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Neighbor one step along `dir`, `None` if it would leave the grid at the top or left.
    /// Bottom and right bounds are left to [`SeatMap::seat`].
    pub fn along_dir(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::TopLeft if self.r > 0 && self.c > 0 => {
                Some(Position::new(self.r - 1, self.c - 1))
            }
            Direction::Top if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::TopRight if self.r > 0 => Some(Position::new(self.r - 1, self.c + 1)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            Direction::BottomLeft if self.c > 0 => Some(Position::new(self.r + 1, self.c - 1)),
            Direction::Bottom => Some(Position::new(self.r + 1, self.c)),
            Direction::BottomRight => Some(Position::new(self.r + 1, self.c + 1)),
            _ => None,
        }
    }
}

/// Layout of seats for one round. A round never edits a map, it builds the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    seats: Vec<Seat>,
    row_n: usize,
    col_n: usize,
}

impl SeatMap {
    pub fn seat(&self, pos: &Position) -> Option<Seat> {
        self.pos_to_ind(pos).map(|ind| self.seats[ind])
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn count(&self, c_seat: Seat) -> usize {
        self.seats.iter().filter(|s| **s == c_seat).count()
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    /// All positions in row-major order, matching the order of [`SeatMap::seats`].
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |r| (0..self.col_n).map(move |c| Position::new(r, c)))
    }

    pub(crate) fn with_seats(&self, seats: Vec<Seat>) -> Self {
        debug_assert_eq!(seats.len(), self.seats.len());
        Self {
            seats,
            row_n: self.row_n,
            col_n: self.col_n,
        }
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r >= self.row_n || pos.c >= self.col_n {
            None
        } else {
            Some(pos.r * self.col_n + pos.c)
        }
    }
}

impl Display for SeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.seats.chunks(self.col_n) {
            let line = row.iter().map(|s| char::from(*s)).collect::<String>();
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

impl FromStr for SeatMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = SeatMapBuilder::new();
        for line in s.lines().filter(|l| !l.trim().is_empty()) {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

pub struct SeatMapBuilder {
    seats: Vec<Seat>,
    row_n: usize,
    col_n: Option<usize>,
}

impl Default for SeatMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatMapBuilder {
    pub fn new() -> Self {
        Self {
            seats: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let seat_n = row_text.chars().count();
        let expect_n = *self.col_n.get_or_insert(seat_n);
        if expect_n != seat_n {
            return Err(Error::InconsistentRow(seat_n, expect_n));
        }

        for c in row_text.chars() {
            self.seats.push(Seat::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<SeatMap, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 => Ok(SeatMap {
                seats: self.seats,
                row_n: self.row_n,
                col_n,
            }),
            _ => Err(Error::EmptySeatMap),
        }
    }
}
