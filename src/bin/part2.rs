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

    let settled = SeatingAutomaton::visible().settle(seat_map)?;
    println!(
        "Looking for visible seats, after {} round(s), given seats layout stabilizes, and there are {} seats have been occupied.",
        settled.rounds, settled.occupied
    );

    Ok(())
}
