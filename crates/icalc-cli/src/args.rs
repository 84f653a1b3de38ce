//! CLI argument parsing with clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

const UNIT_HELP: &str = "Angle unit for trig functions [default: degrees]";

/// An interactive scientific calculator.
///
/// Evaluate expressions directly, or drive the calculator's input state
/// machine with discrete key events and read back display snapshots —
/// the same interface a graphical front-end would use.
#[derive(Debug, Parser)]
#[command(name = "icalc", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a single expression and print the result
    #[command(after_help = "\
Examples:
  icalc eval '2 + 3 * 4'                # Operator precedence: 14
  icalc eval 'sin(90)'                  # Trig in degrees: 1
  icalc eval -u radians 'sin(90)'       # Trig in radians
  icalc eval 'sqrt(2) ^ 2'              # Functions and exponentiation
  icalc eval '20!'                      # Factorials")]
    Eval(EvalArgs),

    /// Feed a key sequence through the state machine, print the snapshot
    #[command(after_help = "\
Each word is a named key (sin, clear, m+) or a run of single-character
keys (5+3= is four presses).

Examples:
  icalc keys '5 + 3 ='                  # Readout shows 8
  icalc keys '5+3='                     # Same, compact
  icalc keys 'sin 90 ) ='               # Function call
  icalc keys '9 m+ clear mr'            # Memory survives all-clear")]
    Keys(KeysArgs),

    /// Interactive read-evaluate loop
    Repl(ReplArgs),

    /// Show an end-to-end usage example
    Examples,
}

#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Expression to evaluate
    pub expression: String,

    #[arg(short, long, value_enum, default_value_t = AngleUnitArg::Degrees, help = UNIT_HELP)]
    pub unit: AngleUnitArg,
}

#[derive(Debug, clap::Args)]
pub struct KeysArgs {
    /// Key sequence, whitespace-separated
    pub keys: String,

    #[arg(short, long, value_enum, default_value_t = AngleUnitArg::Degrees, help = UNIT_HELP)]
    pub unit: AngleUnitArg,
}

#[derive(Debug, clap::Args)]
pub struct ReplArgs {
    #[arg(short, long, value_enum, default_value_t = AngleUnitArg::Degrees, help = UNIT_HELP)]
    pub unit: AngleUnitArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AngleUnitArg {
    Degrees,
    Radians,
}

/// End-to-end example text for the `examples` command.
pub const EXAMPLES_TEXT: &str = r#"End-to-end example: a running total with memory

# 1. Compute a subtotal (precedence applies: 2 + 3 * 4 = 14)
icalc keys '2+3*4='

# 2. Store a value in memory, clear, and recall it
icalc keys '14 m+ clear mr'

# 3. One-shot evaluation without the state machine
icalc eval 'sqrt(2) ^ 2'

# 4. Trig defaults to degrees; switch per invocation
icalc eval 'sin(90)'
icalc eval -u radians 'sin(pi / 2)'

# 5. Drive an interactive session (quit with 'quit')
icalc repl
"#;
