//! Typed evaluation errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error categories surfaced by the expression evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvalErrorKind {
    /// Malformed expression: unknown token, unbalanced parentheses, empty input.
    SyntaxError,
    /// Well-formed expression applied outside a function's domain,
    /// including division by zero.
    DomainError,
    /// The computed value is not a finite real number.
    OverflowOrNan,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::SyntaxError => write!(f, "SYNTAX_ERROR"),
            EvalErrorKind::DomainError => write!(f, "DOMAIN_ERROR"),
            EvalErrorKind::OverflowOrNan => write!(f, "OVERFLOW_OR_NAN"),
        }
    }
}

/// A failed evaluation, with the specific kind retained for diagnostics.
///
/// UI layers only need the fact of failure (they render a sentinel value);
/// the kind and message exist for logging and tests. Errors never escape as
/// panics: every failure inside the evaluator converts to this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl std::error::Error for EvalError {}

impl EvalError {
    pub fn empty_expression() -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: "Expression is empty".to_string(),
        }
    }

    pub fn unknown_token(text: impl Into<String>) -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: format!("Unknown token '{}'", text.into()),
        }
    }

    pub fn unexpected_token(text: impl Into<String>) -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: format!("Unexpected '{}'", text.into()),
        }
    }

    /// The expression stopped where an operand or operator was still required.
    pub fn unexpected_end() -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: "Expression ends prematurely".to_string(),
        }
    }

    pub fn unbalanced_parens() -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: "Unbalanced parentheses".to_string(),
        }
    }

    /// A function name not followed by `(`.
    pub fn missing_argument_list(name: &str) -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: format!("Expected '(' after {}", name),
        }
    }

    pub fn nesting_too_deep(limit: usize) -> Self {
        Self {
            kind: EvalErrorKind::SyntaxError,
            message: format!("Expression nesting exceeds {} levels", limit),
        }
    }

    pub fn division_by_zero() -> Self {
        Self {
            kind: EvalErrorKind::DomainError,
            message: "Division by zero".to_string(),
        }
    }

    /// Domain violation for a named function, e.g. `sqrt` of a negative number.
    pub fn function_domain(name: &str, argument: f64) -> Self {
        Self {
            kind: EvalErrorKind::DomainError,
            message: format!("{}({}) is undefined", name, argument),
        }
    }

    pub fn factorial_domain(operand: f64) -> Self {
        Self {
            kind: EvalErrorKind::DomainError,
            message: format!("Factorial of {} is undefined", operand),
        }
    }

    pub fn not_finite() -> Self {
        Self {
            kind: EvalErrorKind::OverflowOrNan,
            message: "Result is not a finite number".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_code() {
        let err = EvalError::division_by_zero();
        let display = format!("{}", err);
        assert!(display.contains("[DOMAIN_ERROR]"));
        assert!(display.contains("Division by zero"));
    }

    #[test]
    fn test_constructors_pick_expected_kinds() {
        assert_eq!(
            EvalError::unbalanced_parens().kind,
            EvalErrorKind::SyntaxError
        );
        assert_eq!(
            EvalError::unknown_token("@").kind,
            EvalErrorKind::SyntaxError
        );
        assert_eq!(
            EvalError::function_domain("sqrt", -1.0).kind,
            EvalErrorKind::DomainError
        );
        assert_eq!(
            EvalError::factorial_domain(-3.0).kind,
            EvalErrorKind::DomainError
        );
        assert_eq!(EvalError::not_finite().kind, EvalErrorKind::OverflowOrNan);
    }

    #[test]
    fn test_messages_name_the_offender() {
        assert!(EvalError::unknown_token("@").message.contains('@'));
        assert!(EvalError::function_domain("log", 0.0).message.contains("log"));
        assert!(EvalError::factorial_domain(2.5).message.contains("2.5"));
    }

    #[test]
    fn test_json_serialization() {
        let err = EvalError::division_by_zero();
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("DOMAIN_ERROR"));
        assert!(json.contains("Division by zero"));
    }

    #[test]
    fn test_json_deserialization() {
        let json = r#"{"kind":"SYNTAX_ERROR","message":"Unbalanced parentheses"}"#;
        let err: EvalError = serde_json::from_str(json).unwrap();
        assert_eq!(err.kind, EvalErrorKind::SyntaxError);
        assert_eq!(err.message, "Unbalanced parentheses");
    }
}
