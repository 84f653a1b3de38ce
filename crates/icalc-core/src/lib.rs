//! Core types and logic for icalc.
//!
//! This crate holds everything behind an interactive calculator's buttons:
//! the input state machine that accumulates keystrokes into a pending
//! expression, and the evaluator that turns the assembled text into a
//! number. UI front-ends (the bundled CLI, or anything else) translate
//! clicks and keystrokes into discrete input events, feed them in, and
//! render the snapshot that comes back out — nothing here does I/O.
//!
//! # Modules
//!
//! - [`error`]: typed evaluation errors (syntax / domain / overflow)
//! - [`eval`]: tokenizer and precedence-climbing expression evaluator
//! - [`input`]: discrete input events and key-name parsing
//! - [`snapshot`]: read-only display snapshots for UI layers
//! - [`state`]: the input state machine and auxiliary registers
//!
//! # Evaluation contract
//!
//! | Expression | Angle unit | Result |
//! |------------|------------|--------|
//! | `2 + 3 * 4` | any | `14` |
//! | `2 ^ 3 ^ 2` | any | `512` (right-associative) |
//! | `sin(90)` | degrees | `1` |
//! | `1 / 0` | any | `DOMAIN_ERROR` |
//! | `sin(90` | any | `SYNTAX_ERROR` |
//!
//! Successful results are rounded to 12 significant digits. The evaluator
//! is stateless and idempotent, and no error escapes as a panic.

pub mod error;
pub mod eval;
pub mod input;
pub mod snapshot;
pub mod state;
