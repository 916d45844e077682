use anyhow::{Context, Result};
use clap::Parser;
use seating::{CLIArgs, SeatingAutomaton};

fn main() -> Result<()> {
    seating::init_tracing();
    let args = CLIArgs::parse();
    let seat_map = seating::read_sm(&args.input_path).with_context(|| {
        format!(
            "Failed to read map of seats layout from given input file({}).",
            args.input_path.display()
        )
    })?;

    let adjacent_occupied = SeatingAutomaton::adjacent()
        .run(&seat_map)
        .context("Failed to settle seats by adjacent neighbors.")?;
    println!("Occupied seats by adjacent neighbors: {}", adjacent_occupied);

    let visible_occupied = SeatingAutomaton::visible()
        .run(&seat_map)
        .context("Failed to settle seats by visible neighbors.")?;
    println!("Occupied seats by visible neighbors: {}", visible_occupied);

    Ok(())
}
