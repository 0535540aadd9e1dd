//! Traffic Light
//!
//! A three-state cyclic machine on a one-symbol alphabet. Each state prints
//! its color when entered; red is the accepting state.
//!
//! Run with: cargo run --example traffic_light

use tablefsm::core::{Action, Designation, TransitionTable};
use tablefsm::interpreter::Interpreter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Traffic Light ===\n");

    let mut table = TransitionTable::new(3, 1)?;
    table.configure_state(0, Designation::Start, Some(Action::new(|| println!("Green"))))?;
    table.configure_state(1, Designation::Normal, Some(Action::new(|| println!("Yellow"))))?;
    table.configure_state(2, Designation::Accept, Some(Action::new(|| println!("Red"))))?;
    table.add_transition(0, 1, 0)?;
    table.add_transition(1, 2, 0)?;
    table.add_transition(2, 0, 0)?;

    println!("{}", table.render());

    let mut interp = Interpreter::new(&table)?;
    let verdict = interp.run([0, 0])?;

    println!("\nVerdict: {verdict:?}");
    println!("Path: {:?}", interp.history().path());
    Ok(())
}
