//! Input state machine of the calculator.
//!
//! Accumulates keypresses into the display buffer and keeps the numeric
//! registers in sync. Operators are applied strictly left to right: pressing
//! an operator while another is pending evaluates the pending one first.

use super::evaluation::{CalcError, ERROR_TEXT, format_result, parse_leading_float};
use super::key::{Key, Operator};
use serde::Serialize;
use tracing::{debug, warn};

/// Maximum number of characters the display buffer can hold.
pub const DISPLAY_CAPACITY: usize = 31;
/// Default limit on the length of a typed number.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 20;
/// Default number of significant digits shown for results.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 10;
/// Most significant digits an `f64` can meaningfully show.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Calculator registers and display buffer.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    current: f64,
    stored: f64,
    pending: Option<Operator>,
    new_input: bool,
    max_entry_len: usize,
    significant_digits: usize,
}

/// Serializable view of the calculator registers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub display: String,
    pub current: f64,
    pub stored: f64,
    pub pending: Option<Operator>,
    pub new_input: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_ENTRY_LEN, DEFAULT_SIGNIFICANT_DIGITS)
    }

    /// Create a calculator with a custom entry length and result precision.
    /// Both are clamped to what the display and `f64` can hold.
    pub fn with_limits(max_entry_len: usize, significant_digits: usize) -> Self {
        Self {
            display: "0".to_string(),
            current: 0.0,
            stored: 0.0,
            pending: None,
            new_input: true,
            max_entry_len: max_entry_len.clamp(1, DISPLAY_CAPACITY),
            significant_digits: significant_digits.clamp(1, MAX_SIGNIFICANT_DIGITS),
        }
    }

    /// Return to the initial state: display `0`, registers cleared.
    pub fn reset(&mut self) {
        self.display.clear();
        self.display.push('0');
        self.current = 0.0;
        self.stored = 0.0;
        self.pending = None;
        self.new_input = true;
    }

    /// Apply a single keypress.
    pub fn handle_key(&mut self, key: Key) {
        debug!(%key, display = %self.display, "calculator key");

        match key {
            Key::Clear => self.reset(),
            Key::Backspace => self.backspace(),
            Key::Equals => self.equals(),
            Key::Operator(op) => self.operator(op),
            Key::Digit(_) | Key::Decimal => self.enter(key),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn stored(&self) -> f64 {
        self.stored
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn is_new_input(&self) -> bool {
        self.new_input
    }

    /// Whether the display shows the error literal.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TEXT
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            current: self.current,
            stored: self.stored,
            pending: self.pending,
            new_input: self.new_input,
        }
    }

    fn backspace(&mut self) {
        if self.is_error() || self.display.len() <= 1 {
            self.display.clear();
            self.display.push('0');
            self.current = 0.0;
            self.new_input = true;
        } else {
            self.display.pop();
            self.current = parse_leading_float(&self.display);
        }
    }

    fn equals(&mut self) {
        if let Some(op) = self.pending.take() {
            // Failure already shows on the display.
            let _ = self.evaluate(op);
        }
        self.new_input = true;
    }

    fn operator(&mut self, op: Operator) {
        match self.pending {
            Some(pending) => {
                if self.evaluate(pending).is_err() {
                    return;
                }
            }
            None => self.stored = self.current,
        }
        self.pending = Some(op);
        self.new_input = true;
    }

    fn enter(&mut self, key: Key) {
        let Some(c) = key.entry_char() else {
            return;
        };

        if self.new_input {
            self.display.clear();
            self.display.push(c);
            self.new_input = false;
        } else if self.display.len() < self.max_entry_len {
            if self.display == "0" && c != '.' {
                self.display.clear();
                self.display.push(c);
            } else if c != '.' || !self.display.contains('.') {
                self.display.push(c);
            }
        }

        self.current = parse_leading_float(&self.display);
    }

    /// Evaluate `op` against the registers and show the result.
    ///
    /// On failure the registers are left untouched, the display shows the
    /// error literal, and the calculator waits for a fresh number.
    fn evaluate(&mut self, op: Operator) -> Result<f64, CalcError> {
        match op.apply(self.stored, self.current) {
            Ok(value) => {
                self.stored = value;
                self.current = value;
                self.display = format_result(value, self.significant_digits);
                self.display.truncate(DISPLAY_CAPACITY);
                Ok(value)
            }
            Err(err) => {
                warn!(%err, stored = self.stored, op = %op.symbol(), "evaluation failed");
                self.display = ERROR_TEXT.to_string();
                self.pending = None;
                self.new_input = true;
                Err(err)
            }
        }
    }
}
