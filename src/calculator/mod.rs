//! Calculator applet core.
//!
//! This module provides:
//! - Typed keys decoded from button labels
//! - The input state machine holding the display and registers
//! - Evaluation and `%g`-style formatting of results
//! - Copying the display to the clipboard

mod clipboard;
mod evaluation;
mod key;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::{CalcError, ERROR_TEXT, format_result, parse_leading_float};
pub use key::{BACKSPACE_LABEL, Key, KeyError, Operator};
pub use state::{
    Calculator, DEFAULT_MAX_ENTRY_LEN, DEFAULT_SIGNIFICANT_DIGITS, DISPLAY_CAPACITY, Snapshot,
};
