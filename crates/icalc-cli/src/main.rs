//! icalc CLI entry point.

mod args;
mod repl;

use clap::Parser;
use icalc_core::eval::{self, AngleUnit};
use icalc_core::input::parse_key_sequence;
use icalc_core::state::Calculator;
use tracing::{debug, error};

use crate::args::{AngleUnitArg, Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Convert the CLI arg enum to the core angle unit.
fn angle_unit(arg: AngleUnitArg) -> AngleUnit {
    match arg {
        AngleUnitArg::Degrees => AngleUnit::Degrees,
        AngleUnitArg::Radians => AngleUnit::Radians,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Eval(args) => run_eval(&args.expression, angle_unit(args.unit)),
        Commands::Keys(args) => run_keys(&args.keys, angle_unit(args.unit)),
        Commands::Repl(args) => repl::run(angle_unit(args.unit)),
        Commands::Examples => {
            println!("{}", args::EXAMPLES_TEXT);
            Ok(())
        }
    }
}

/// Evaluate one expression and print the canonical result string.
fn run_eval(expression: &str, unit: AngleUnit) -> anyhow::Result<()> {
    debug!("Evaluating '{}' ({})", expression, unit.label());
    let value = eval::evaluate(expression, unit)?;
    println!("{}", eval::canonical_string(value));
    Ok(())
}

/// Feed a key sequence through a fresh calculator and print the final
/// snapshot as JSON.
fn run_keys(keys: &str, unit: AngleUnit) -> anyhow::Result<()> {
    let events = parse_key_sequence(keys)
        .ok_or_else(|| anyhow::anyhow!("Unrecognized key in sequence '{}'", keys))?;

    let mut calc = Calculator::with_angle_unit(unit);
    for event in events {
        debug!("Applying {:?}", event);
        calc.apply(event);
    }

    println!("{}", serde_json::to_string_pretty(&calc.snapshot())?);
    Ok(())
}
