use crate::number::{format_number, parse_display};
use crate::token::{Operator, Token};

/// The calculator's entire mutable state.
///
/// `display` is the buffer shown to the user; it always parses back through
/// standard decimal parsing (non-finite literals included) or is `"0"`.
/// Whenever `pending_operation` is set, `previous_value` is set too, because
/// both are populated at the step the operator is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub display: String,
    pub previous_value: Option<f64>,
    pub pending_operation: Option<Operator>,
    pub awaiting_new_entry: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            pending_operation: None,
            awaiting_new_entry: false,
        }
    }
}

/// A deterministic state machine turning a stream of keystrokes into display
/// output.
///
/// Each operation consumes the current state and produces the next one in
/// place; there is no I/O and no failure path. Invalid arithmetic results
/// (divide by zero, square root of a negative) propagate as non-finite values
/// rendered into the display for the caller to show as-is.
pub struct CalculatorEngine {
    pub state: EngineState,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::default(),
        }
    }

    /// The current display buffer.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// The operator awaiting its right-hand operand, for a pending-operation
    /// indicator next to the display.
    pub fn pending_operation(&self) -> Option<Operator> {
        self.state.pending_operation
    }

    /// Dispatches one keystroke to the matching operation.
    pub fn press(&mut self, token: Token) {
        match token {
            Token::Digit(d) => self.input_digit(d),
            Token::DecimalPoint => self.input_decimal_point(),
            Token::Operator(op) => self.input_operator(op),
            Token::Equals => self.input_equals(),
            Token::ClearAll => self.clear_all(),
            Token::ClearEntry => self.clear_entry(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percent(),
            Token::SquareRoot => self.square_root(),
            Token::Backspace => self.backspace(),
        }
    }

    /// Appends a digit, or starts a fresh number after an operator or equals.
    ///
    /// Callers pass `d` in `0..=9`; the tape parser guarantees this for
    /// tokens read from input.
    pub fn input_digit(&mut self, d: u8) {
        debug_assert!(d <= 9);
        let digit = char::from(b'0' + d);
        if self.state.awaiting_new_entry {
            self.state.display = digit.to_string();
            self.state.awaiting_new_entry = false;
        } else if self.state.display == "0" {
            // Leading zero is replaced, not accumulated
            self.state.display = digit.to_string();
        } else {
            self.state.display.push(digit);
        }
    }

    /// Appends a decimal point; a second one is ignored.
    pub fn input_decimal_point(&mut self) {
        if self.state.awaiting_new_entry {
            self.state.display = "0.".to_string();
            self.state.awaiting_new_entry = false;
        } else if !self.state.display.contains('.') {
            self.state.display.push('.');
        }
    }

    /// Accepts a binary operator.
    ///
    /// With an operand already entered for a pending operation, this chains:
    /// the pending operation is evaluated and its result becomes the left
    /// operand of the new one. Without a fresh operand (operator pressed
    /// twice in a row), the new operator replaces the pending one instead of
    /// evaluating against the unchanged display value.
    pub fn input_operator(&mut self, op: Operator) {
        let current = parse_display(&self.state.display);
        match (self.state.previous_value, self.state.pending_operation) {
            (Some(previous), Some(pending)) if !self.state.awaiting_new_entry => {
                let result = pending.apply(previous, current);
                self.state.display = format_number(result);
                self.state.previous_value = Some(result);
            }
            _ => self.state.previous_value = Some(current),
        }
        self.state.pending_operation = Some(op);
        self.state.awaiting_new_entry = true;
    }

    /// Resolves the pending operation, if any, and ends the chain.
    pub fn input_equals(&mut self) {
        if let (Some(previous), Some(pending)) =
            (self.state.previous_value, self.state.pending_operation)
        {
            let current = parse_display(&self.state.display);
            self.state.display = format_number(pending.apply(previous, current));
            self.state.previous_value = None;
            self.state.pending_operation = None;
            self.state.awaiting_new_entry = true;
        }
    }

    /// Resets every field to the initial state.
    pub fn clear_all(&mut self) {
        self.state = EngineState::default();
    }

    /// Clears the current entry only; a pending operation survives.
    pub fn clear_entry(&mut self) {
        self.state.display = "0".to_string();
        self.state.awaiting_new_entry = false;
    }

    pub fn toggle_sign(&mut self) {
        self.state.display = format_number(-parse_display(&self.state.display));
    }

    pub fn percent(&mut self) {
        self.state.display = format_number(parse_display(&self.state.display) / 100.0);
    }

    /// Square root; a negative operand yields a `NaN` display, never a panic.
    pub fn square_root(&mut self) {
        self.state.display = format_number(parse_display(&self.state.display).sqrt());
    }

    /// Drops the last character of the display.
    ///
    /// An emptied buffer resets to `"0"`, as does a bare `"-"` left over from
    /// a negative number, so the buffer stays parseable.
    pub fn backspace(&mut self) {
        self.state.display.pop();
        if self.state.display.is_empty() || self.state.display == "-" {
            self.state.display = "0".to_string();
        }
    }
}
