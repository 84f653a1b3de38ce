//! Read-only display snapshots for UI layers.
//!
//! The state machine never hands out references into its own fields; after
//! every transition the UI layer reads an owned [`DisplayState`] and
//! renders that. External code cannot mutate calculator state by accident,
//! and automation can diff successive snapshots freely.

use serde::{Deserialize, Serialize};

use crate::error::EvalErrorKind;
use crate::eval::AngleUnit;

/// A point-in-time view of the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Operand or result text on the main display. Holds the `"Error"`
    /// sentinel after a failed evaluation, and is empty immediately after
    /// an operator commit (the pending text moved into `history`).
    pub readout: String,
    /// Committed operands and operators joined with single spaces
    /// (`"5 +"`); empty when no binary operation is pending.
    pub history: String,
    pub angle_unit: AngleUnit,
    pub memory: f64,
    /// Kind of the most recent failed evaluation, until the next
    /// successful input clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EvalErrorKind>,
}

impl DisplayState {
    /// True when the snapshot shows a failed evaluation.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DisplayState {
        DisplayState {
            readout: "8".to_string(),
            history: String::new(),
            angle_unit: AngleUnit::Degrees,
            memory: 0.0,
            error: None,
        }
    }

    #[test]
    fn error_field_is_omitted_when_absent() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("error"));
        assert!(json.contains("\"readout\":\"8\""));
        assert!(json.contains("\"angle_unit\":\"degrees\""));
    }

    #[test]
    fn error_field_round_trips() {
        let mut state = sample();
        state.readout = "Error".to_string();
        state.error = Some(EvalErrorKind::DomainError);

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("DOMAIN_ERROR"));

        let back: DisplayState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(back.failed());
    }

    #[test]
    fn fresh_snapshot_has_not_failed() {
        assert!(!sample().failed());
    }
}
