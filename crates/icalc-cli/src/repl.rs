//! Interactive read-evaluate loop.
//!
//! Reads one line of key words per prompt, applies them to the session
//! calculator, and echoes the display. Fully synchronous: each line is
//! handled to completion before the next read, matching the core's
//! one-event-at-a-time contract.

use std::io::{self, BufRead, Write};

use icalc_core::eval::{canonical_string, AngleUnit};
use icalc_core::input::parse_key_sequence;
use icalc_core::state::Calculator;
use thiserror::Error;
use tracing::debug;

/// Failures of the REPL plumbing itself. Calculator errors are not
/// errors here — they are display state.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
    #[error("unrecognized key in '{0}'")]
    UnknownKey(String),
}

const PROMPT: &str = "icalc> ";

pub fn run(unit: AngleUnit) -> anyhow::Result<()> {
    let mut calc = Calculator::with_angle_unit(unit);

    println!("icalc interactive mode. Type key words like '5+3=' or 'sin 90 ) ='.");
    println!("Commands: help, quit");
    render(&calc);

    let stdin = io::stdin();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().map_err(ReplError::Read)?;

        let mut line = String::new();
        let bytes = stdin.lock().read_line(&mut line).map_err(ReplError::Read)?;
        if bytes == 0 {
            // EOF
            break;
        }

        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        match apply_line(&mut calc, line) {
            Ok(()) => render(&calc),
            Err(e) => println!("{} (try 'help')", e),
        }
    }

    Ok(())
}

fn apply_line(calc: &mut Calculator, line: &str) -> Result<(), ReplError> {
    let events =
        parse_key_sequence(line).ok_or_else(|| ReplError::UnknownKey(line.to_string()))?;
    for event in events {
        debug!("Applying {:?}", event);
        calc.apply(event);
    }
    Ok(())
}

/// Print the display line: pending history, then the readout.
fn render(calc: &Calculator) {
    let snapshot = calc.snapshot();
    let mut display = String::new();
    if !snapshot.history.is_empty() {
        display.push_str(&snapshot.history);
        display.push(' ');
    }
    display.push_str(&snapshot.readout);

    if snapshot.memory != 0.0 {
        println!(
            "[{}] {}  (M = {})",
            snapshot.angle_unit.label(),
            display,
            canonical_string(snapshot.memory)
        );
    } else {
        println!("[{}] {}", snapshot.angle_unit.label(), display);
    }
}

fn print_help() {
    println!("Keys:");
    println!("  digits and .          build the current operand");
    println!("  + - * / ^ ! ( )       operators and symbols");
    println!("  sin cos tan log ln sqrt inv   open a function call");
    println!("  pi / π, e             constants");
    println!("  = or enter            evaluate");
    println!("  backspace, clear      delete one key / reset (memory survives)");
    println!("  deg                   toggle degrees/radians");
    println!("  m+ m- mr mc           memory add/subtract/recall/clear");
    println!("Commands: help, quit");
}
