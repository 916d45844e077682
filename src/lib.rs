use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod automaton;
pub mod neighbor;
pub mod seat;

pub use automaton::{SeatingAutomaton, Settled, DEFAULT_MAX_ROUNDS};
pub use neighbor::{AdjacentNeighbors, NeighborCounter, VisibleNeighbors};
pub use seat::{Direction, Position, Seat, SeatMap, SeatMapBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidSeatSymbol(char),
    InconsistentRow(usize, usize), // (element count of current row, expect count of elements in earlier row).
    EmptySeatMap,
    NotStabilized(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSeatSymbol(c) => write!(f, "Invalid character({}) for seat.", c),
            Error::InconsistentRow(cur_count, expect_count) => write!(
                f,
                "Given row({} elements), expect row which have {} elements.",
                cur_count, expect_count
            ),
            Error::EmptySeatMap => write!(f, "No row of seats found in given layout."),
            Error::NotStabilized(round_n) => write!(
                f,
                "Seats layout doesn't stabilize after {} round(s).",
                round_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_sm<P: AsRef<Path>>(path: P) -> Result<SeatMap> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = SeatMapBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        builder
            .add_row(&line)
            .with_context(|| format!("Invalid seats row at line {}.", ind + 1))?;
    }

    Ok(builder.build()?)
}

/// Installs a stderr log subscriber filtered by `RUST_LOG`, keeping stdout for answers.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
