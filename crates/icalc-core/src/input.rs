//! Discrete input events and key-name parsing.
//!
//! UI layers capture whatever they capture (button clicks, keystrokes,
//! CLI words) and translate it into [`InputEvent`] values; the state
//! machine consumes nothing else. No layout or geometry information
//! crosses this boundary.

use serde::{Deserialize, Serialize};

/// Binary operator keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKey {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperatorKey {
    /// Symbol pushed onto the operator history.
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKey::Add => "+",
            OperatorKey::Subtract => "-",
            OperatorKey::Multiply => "*",
            OperatorKey::Divide => "/",
        }
    }
}

/// Unary function keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKey {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Inv,
}

impl FunctionKey {
    /// Every function key, in display order.
    pub const ALL: [FunctionKey; 7] = [
        FunctionKey::Sin,
        FunctionKey::Cos,
        FunctionKey::Tan,
        FunctionKey::Log,
        FunctionKey::Ln,
        FunctionKey::Sqrt,
        FunctionKey::Inv,
    ];

    /// The text a key press appends to the operand, e.g. `"sin("`.
    ///
    /// The closing paren is the user's to type; `delete` removes the whole
    /// token atomically by matching these strings.
    pub fn open_token(self) -> &'static str {
        match self {
            FunctionKey::Sin => "sin(",
            FunctionKey::Cos => "cos(",
            FunctionKey::Tan => "tan(",
            FunctionKey::Log => "log(",
            FunctionKey::Ln => "ln(",
            FunctionKey::Sqrt => "sqrt(",
            FunctionKey::Inv => "inv(",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(FunctionKey::Sin),
            "cos" => Some(FunctionKey::Cos),
            "tan" => Some(FunctionKey::Tan),
            "log" => Some(FunctionKey::Log),
            "ln" => Some(FunctionKey::Ln),
            "sqrt" => Some(FunctionKey::Sqrt),
            "inv" => Some(FunctionKey::Inv),
            _ => None,
        }
    }
}

/// Constant keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantKey {
    Pi,
    Euler,
}

impl ConstantKey {
    /// The glyph a key press appends to the operand.
    pub fn glyph(self) -> &'static str {
        match self {
            ConstantKey::Pi => "π",
            ConstantKey::Euler => "e",
        }
    }
}

/// One fully-formed input event for the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit `0`-`9` or the decimal point.
    Digit { value: char },
    /// A literal symbol appended to the operand: `(`, `)`, `^`, `!`.
    Symbol { value: char },
    /// Commit the pending operand and a binary operator.
    Operator { op: OperatorKey },
    /// Open a function call, e.g. `sin(`.
    Function { name: FunctionKey },
    /// Append a constant glyph.
    Constant { name: ConstantKey },
    /// Flip degrees/radians.
    ToggleAngleUnit,
    /// Backspace.
    Delete,
    /// Reset operand, history and error; memory survives.
    AllClear,
    /// Assemble and evaluate the pending expression.
    Evaluate,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

/// Map a single key character to an event.
fn parse_char(c: char) -> Option<InputEvent> {
    match c {
        '0'..='9' | '.' => Some(InputEvent::Digit { value: c }),
        '(' | ')' | '^' | '!' => Some(InputEvent::Symbol { value: c }),
        '+' => Some(InputEvent::Operator {
            op: OperatorKey::Add,
        }),
        '-' | '−' => Some(InputEvent::Operator {
            op: OperatorKey::Subtract,
        }),
        '*' | '×' => Some(InputEvent::Operator {
            op: OperatorKey::Multiply,
        }),
        '/' | '÷' => Some(InputEvent::Operator {
            op: OperatorKey::Divide,
        }),
        '=' => Some(InputEvent::Evaluate),
        'π' => Some(InputEvent::Constant {
            name: ConstantKey::Pi,
        }),
        'e' => Some(InputEvent::Constant {
            name: ConstantKey::Euler,
        }),
        _ => None,
    }
}

/// Parse a key name into an event.
///
/// Accepts single characters (`5`, `+`, `=`, `π`) and named keys
/// (`sin`, `backspace`, `clear`, `deg`, `m+`, `mr`). Names are matched
/// case-insensitively. Returns `None` for anything unrecognized.
pub fn parse_key(key: &str) -> Option<InputEvent> {
    let lower = key.to_lowercase();

    let mut chars = lower.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(event) = parse_char(c) {
            return Some(event);
        }
    }

    match lower.as_str() {
        "pi" => Some(InputEvent::Constant {
            name: ConstantKey::Pi,
        }),
        "deg" | "rad" | "drg" => Some(InputEvent::ToggleAngleUnit),
        "enter" | "equals" => Some(InputEvent::Evaluate),
        "backspace" | "delete" | "del" => Some(InputEvent::Delete),
        "escape" | "esc" | "clear" | "ac" => Some(InputEvent::AllClear),
        "m+" => Some(InputEvent::MemoryAdd),
        "m-" => Some(InputEvent::MemorySubtract),
        "mr" => Some(InputEvent::MemoryRecall),
        "mc" => Some(InputEvent::MemoryClear),
        other => FunctionKey::from_name(other).map(|name| InputEvent::Function { name }),
    }
}

/// Parse a whitespace-separated key sequence into events.
///
/// Each word is either a named key (`sin`, `m+`, `clear`) or a run of
/// single-character keys (`5+3=` is four events). Returns `None` if the
/// sequence is empty or any word fails to parse.
///
/// # Examples
///
/// ```
/// use icalc_core::input::parse_key_sequence;
///
/// let seq = parse_key_sequence("5 + 3 =").unwrap();
/// assert_eq!(seq.len(), 4);
///
/// // Compact runs work too
/// let seq = parse_key_sequence("5+3=").unwrap();
/// assert_eq!(seq.len(), 4);
///
/// // Function names are words; digit runs expand per character
/// let seq = parse_key_sequence("sin 90 ) =").unwrap();
/// assert_eq!(seq.len(), 5);
/// ```
pub fn parse_key_sequence(sequence: &str) -> Option<Vec<InputEvent>> {
    let words: Vec<&str> = sequence.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    let mut events = Vec::with_capacity(words.len());
    for word in words {
        if let Some(event) = parse_key(word) {
            events.push(event);
            continue;
        }
        // Not a named key: treat as a run of single-character keys.
        for c in word.chars() {
            events.push(parse_char(c)?);
        }
    }

    Some(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_digits() {
        assert_eq!(parse_key("5"), Some(InputEvent::Digit { value: '5' }));
        assert_eq!(parse_key("."), Some(InputEvent::Digit { value: '.' }));
    }

    #[test]
    fn test_parse_key_operators() {
        assert_eq!(
            parse_key("+"),
            Some(InputEvent::Operator {
                op: OperatorKey::Add
            })
        );
        assert_eq!(
            parse_key("÷"),
            Some(InputEvent::Operator {
                op: OperatorKey::Divide
            })
        );
    }

    #[test]
    fn test_parse_key_symbols() {
        for c in ['(', ')', '^', '!'] {
            assert_eq!(
                parse_key(&c.to_string()),
                Some(InputEvent::Symbol { value: c })
            );
        }
    }

    #[test]
    fn test_parse_key_constants() {
        assert_eq!(
            parse_key("π"),
            Some(InputEvent::Constant {
                name: ConstantKey::Pi
            })
        );
        assert_eq!(
            parse_key("pi"),
            Some(InputEvent::Constant {
                name: ConstantKey::Pi
            })
        );
        assert_eq!(
            parse_key("e"),
            Some(InputEvent::Constant {
                name: ConstantKey::Euler
            })
        );
    }

    #[test]
    fn test_parse_key_functions_case_insensitive() {
        assert_eq!(
            parse_key("sin"),
            Some(InputEvent::Function {
                name: FunctionKey::Sin
            })
        );
        assert_eq!(
            parse_key("SQRT"),
            Some(InputEvent::Function {
                name: FunctionKey::Sqrt
            })
        );
    }

    #[test]
    fn test_parse_key_named_actions() {
        assert_eq!(parse_key("Enter"), Some(InputEvent::Evaluate));
        assert_eq!(parse_key("="), Some(InputEvent::Evaluate));
        assert_eq!(parse_key("Backspace"), Some(InputEvent::Delete));
        assert_eq!(parse_key("Escape"), Some(InputEvent::AllClear));
        assert_eq!(parse_key("clear"), Some(InputEvent::AllClear));
        assert_eq!(parse_key("deg"), Some(InputEvent::ToggleAngleUnit));
    }

    #[test]
    fn test_parse_key_memory() {
        assert_eq!(parse_key("m+"), Some(InputEvent::MemoryAdd));
        assert_eq!(parse_key("m-"), Some(InputEvent::MemorySubtract));
        assert_eq!(parse_key("mr"), Some(InputEvent::MemoryRecall));
        assert_eq!(parse_key("mc"), Some(InputEvent::MemoryClear));
    }

    #[test]
    fn test_parse_key_unknown() {
        assert_eq!(parse_key("notakey"), None);
        assert_eq!(parse_key("@"), None);
    }

    #[test]
    fn test_parse_key_sequence_words() {
        let seq = parse_key_sequence("5 + 3 =").unwrap();
        assert_eq!(
            seq,
            vec![
                InputEvent::Digit { value: '5' },
                InputEvent::Operator {
                    op: OperatorKey::Add
                },
                InputEvent::Digit { value: '3' },
                InputEvent::Evaluate,
            ]
        );
    }

    #[test]
    fn test_parse_key_sequence_compact_run() {
        let seq = parse_key_sequence("5+3=").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[3], InputEvent::Evaluate);
    }

    #[test]
    fn test_parse_key_sequence_mixed() {
        let seq = parse_key_sequence("sin 90 ) =").unwrap();
        assert_eq!(
            seq[0],
            InputEvent::Function {
                name: FunctionKey::Sin
            }
        );
        // "90" expands to two digit events
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_parse_key_sequence_empty_returns_none() {
        assert!(parse_key_sequence("").is_none());
        assert!(parse_key_sequence("   ").is_none());
    }

    #[test]
    fn test_parse_key_sequence_invalid_returns_none() {
        assert!(parse_key_sequence("5 + nope").is_none());
        assert!(parse_key_sequence("5@3").is_none());
    }

    #[test]
    fn test_open_tokens_end_with_paren() {
        for func in FunctionKey::ALL {
            assert!(func.open_token().ends_with('('));
            assert_eq!(FunctionKey::from_name(&func.open_token()[..func.open_token().len() - 1]),
                Some(func));
        }
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&InputEvent::Digit { value: '5' }).unwrap();
        assert_eq!(json, r#"{"action":"digit","value":"5"}"#);

        let event: InputEvent = serde_json::from_str(r#"{"action":"memory_add"}"#).unwrap();
        assert_eq!(event, InputEvent::MemoryAdd);

        let json = serde_json::to_string(&InputEvent::Function {
            name: FunctionKey::Sqrt,
        })
        .unwrap();
        assert!(json.contains("sqrt"));
    }
}
