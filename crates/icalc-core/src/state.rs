//! The input state machine behind the calculator display.
//!
//! A [`Calculator`] accumulates keystrokes into a pending operand and an
//! operator history, owns the auxiliary registers (memory, angle unit),
//! and hands finished expressions to the evaluator. Transitions are plain
//! synchronous methods: each one runs to completion before the next input
//! event is applied, and none of them panics.
//!
//! The machine has two logical states. In `AwaitingOperand` (after an
//! operator, a clear, or an evaluation) the next typed text replaces the
//! operand; otherwise it appends. Evaluation errors are never fatal: the
//! display shows a sentinel and the next input proceeds normally.

use crate::error::EvalErrorKind;
use crate::eval::{self, canonical_string, AngleUnit};
use crate::input::{ConstantKey, FunctionKey, InputEvent, OperatorKey};
use crate::snapshot::DisplayState;

/// Display sentinel shown after a failed evaluation.
pub const ERROR_SENTINEL: &str = "Error";

/// Calculator session state.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Text of the operand/expression segment being typed.
    current_operand: String,
    /// Alternating committed operands and operator symbols.
    history: Vec<String>,
    /// True when the next typed text starts a fresh operand.
    awaiting_operand: bool,
    angle_unit: AngleUnit,
    /// Survives `all_clear`; mutated only by the memory operations.
    memory: f64,
    last_error: Option<EvalErrorKind>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            history: Vec::new(),
            awaiting_operand: true,
            angle_unit: AngleUnit::default(),
            memory: 0.0,
            last_error: None,
        }
    }

    /// A fresh calculator starting in the given angle unit.
    pub fn with_angle_unit(unit: AngleUnit) -> Self {
        Self {
            angle_unit: unit,
            ..Self::new()
        }
    }

    /// Dispatch one input event to the matching transition.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit { value } => self.press_digit(value),
            InputEvent::Symbol { value } => self.press_symbol(value),
            InputEvent::Operator { op } => self.press_operator(op),
            InputEvent::Function { name } => self.press_function(name),
            InputEvent::Constant { name } => self.press_constant(name),
            InputEvent::ToggleAngleUnit => self.toggle_angle_unit(),
            InputEvent::Delete => self.delete(),
            InputEvent::AllClear => self.all_clear(),
            InputEvent::Evaluate => self.evaluate(),
            InputEvent::MemoryAdd => self.memory_add(),
            InputEvent::MemorySubtract => self.memory_subtract(),
            InputEvent::MemoryRecall => self.memory_recall(),
            InputEvent::MemoryClear => self.memory_clear(),
        }
    }

    /// Type a digit or the decimal point.
    ///
    /// A second decimal point within the same operand is ignored; a
    /// leading point becomes `"0."`. Non-digit characters are ignored.
    pub fn press_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() && digit != '.' {
            return;
        }
        self.last_error = None;
        if self.awaiting_operand {
            self.current_operand = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.awaiting_operand = false;
        } else {
            if digit == '.' && self.current_operand.contains('.') {
                return;
            }
            self.current_operand.push(digit);
        }
    }

    /// Type one of the literal symbols `(`, `)`, `^`, `!`.
    pub fn press_symbol(&mut self, symbol: char) {
        if !matches!(symbol, '(' | ')' | '^' | '!') {
            return;
        }
        self.last_error = None;
        let mut text = [0u8; 4];
        self.append_text(symbol.encode_utf8(&mut text));
    }

    /// Commit the pending operand and a binary operator.
    ///
    /// Operators never collapse: pressing one with nothing typed still
    /// pushes the current operand (possibly `"0"`, possibly empty after a
    /// previous operator), and the mistake surfaces as a syntax error on
    /// evaluate.
    pub fn press_operator(&mut self, op: OperatorKey) {
        self.last_error = None;
        let operand = std::mem::take(&mut self.current_operand);
        self.history.push(operand);
        self.history.push(op.symbol().to_string());
        self.awaiting_operand = true;
    }

    /// Open a function call: appends `"sin("` etc. to the operand.
    ///
    /// The closing paren is not auto-inserted; leaving it off makes the
    /// eventual evaluation fail with a syntax error.
    pub fn press_function(&mut self, name: FunctionKey) {
        self.last_error = None;
        self.append_text(name.open_token());
    }

    /// Append a constant glyph (`π`, `e`).
    pub fn press_constant(&mut self, name: ConstantKey) {
        self.last_error = None;
        self.append_text(name.glyph());
    }

    /// Flip degrees/radians. Affects only trig evaluation.
    pub fn toggle_angle_unit(&mut self) {
        self.angle_unit = self.angle_unit.toggled();
    }

    /// Backspace.
    ///
    /// A trailing function-open token (`"sin("`) is removed atomically;
    /// otherwise the last character is dropped. An emptied operand resets
    /// to `"0"` and awaits fresh input.
    pub fn delete(&mut self) {
        self.last_error = None;
        let trailing_function = FunctionKey::ALL
            .into_iter()
            .find(|func| self.current_operand.ends_with(func.open_token()));
        if let Some(func) = trailing_function {
            let cut = self.current_operand.len() - func.open_token().len();
            self.current_operand.truncate(cut);
        } else {
            self.current_operand.pop();
        }
        if self.current_operand.is_empty() {
            self.current_operand.push('0');
            self.awaiting_operand = true;
        }
    }

    /// Reset operand, history and error state. Memory and angle unit
    /// deliberately survive.
    pub fn all_clear(&mut self) {
        self.current_operand = "0".to_string();
        self.history.clear();
        self.awaiting_operand = true;
        self.last_error = None;
    }

    /// Assemble the pending expression and evaluate it.
    ///
    /// A no-op when there is nothing to compute. On success the canonical
    /// result string becomes the new operand; on failure the display shows
    /// the error sentinel while the pending history stays put, so the
    /// faulty computation remains visible.
    pub fn evaluate(&mut self) {
        if self.history.is_empty() && self.awaiting_operand {
            return;
        }

        let expression = self.assemble_expression();
        match eval::evaluate(&expression, self.angle_unit) {
            Ok(value) => {
                self.current_operand = canonical_string(value);
                self.history.clear();
                self.awaiting_operand = true;
                self.last_error = None;
            }
            Err(err) => {
                self.current_operand = ERROR_SENTINEL.to_string();
                self.awaiting_operand = true;
                self.last_error = Some(err.kind);
            }
        }
    }

    /// Add the current operand's value to the memory register.
    ///
    /// Only the operand is evaluated, not the pending expression; an
    /// unevaluable operand contributes zero.
    pub fn memory_add(&mut self) {
        self.fold_into_memory(1.0);
    }

    /// Subtract the current operand's value from the memory register.
    pub fn memory_subtract(&mut self) {
        self.fold_into_memory(-1.0);
    }

    /// Replace the operand with the memory register's canonical string.
    pub fn memory_recall(&mut self) {
        self.current_operand = canonical_string(self.memory);
        self.awaiting_operand = true;
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// Owned snapshot for the UI layer to render.
    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            readout: self.current_operand.clone(),
            history: self.history.join(" "),
            angle_unit: self.angle_unit,
            memory: self.memory,
            error: self.last_error,
        }
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Replace the operand when awaiting fresh input, append otherwise.
    fn append_text(&mut self, text: &str) {
        if self.awaiting_operand {
            self.current_operand = text.to_string();
            self.awaiting_operand = false;
        } else {
            self.current_operand.push_str(text);
        }
    }

    /// History tokens joined by single spaces, then the pending operand.
    fn assemble_expression(&self) -> String {
        let mut parts: Vec<&str> = self.history.iter().map(String::as_str).collect();
        if !self.current_operand.is_empty() {
            parts.push(&self.current_operand);
        }
        parts.join(" ")
    }

    fn fold_into_memory(&mut self, sign: f64) {
        if let Ok(value) = eval::evaluate(&self.current_operand, self.angle_unit) {
            self.memory += sign * value;
        }
        self.awaiting_operand = true;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
