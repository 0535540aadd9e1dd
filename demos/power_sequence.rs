//! Power Sequence
//!
//! A power controller driven by externally produced button events. Actions
//! do not touch globals; they update a shared session object that the
//! driver loop reads back after every step.
//!
//! States: Off (start), Standby, On (accepting).
//! Symbols: 0 = short press, 1 = long press.
//!
//! Run with: cargo run --example power_sequence

use std::sync::{Arc, Mutex};
use tablefsm::builder::TableBuilder;
use tablefsm::core::Designation;
use tablefsm::interpreter::Interpreter;
use tracing_subscriber::EnvFilter;

const OFF: usize = 0;
const STANDBY: usize = 1;
const ON: usize = 2;

const SHORT_PRESS: usize = 0;
const LONG_PRESS: usize = 1;

#[derive(Debug, Default)]
struct PowerSession {
    mode: &'static str,
    switches: usize,
}

impl PowerSession {
    fn enter(&mut self, mode: &'static str) {
        self.mode = mode;
        self.switches += 1;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Power Sequence ===\n");

    let session = Arc::new(Mutex::new(PowerSession::default()));
    let mode = |name: &'static str| {
        let session = Arc::clone(&session);
        move || {
            if let Ok(mut session) = session.lock() {
                session.enter(name);
            }
        }
    };

    let table = TableBuilder::new(3, 2)
        .state_with(OFF, Designation::Start, mode("off"))
        .state_with(STANDBY, Designation::Normal, mode("standby"))
        .state_with(ON, Designation::Accept, mode("on"))
        .transition(OFF, STANDBY, SHORT_PRESS)
        .transition(STANDBY, ON, SHORT_PRESS)
        .transition(STANDBY, OFF, LONG_PRESS)
        .transition(ON, STANDBY, SHORT_PRESS)
        .transition(ON, OFF, LONG_PRESS)
        .build()?;

    // Stand-in for a button driver; the last press has no transition out of Off.
    let presses = [SHORT_PRESS, SHORT_PRESS, SHORT_PRESS, LONG_PRESS, LONG_PRESS];

    let mut interp = Interpreter::new(&table)?;
    interp.run_current_action();
    for press in presses {
        match interp.step(press) {
            Ok(_) => {
                interp.run_current_action();
                let session = session.lock().map_err(|e| e.to_string())?;
                println!("press {press} -> {} (switch #{})", session.mode, session.switches);
            }
            Err(e) => {
                println!("halting: {e}");
                break;
            }
        }
    }

    println!("\nPowered on: {}", interp.is_accepting());
    Ok(())
}
