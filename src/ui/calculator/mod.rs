mod delegate;
pub mod keypad;

pub use delegate::{CalculatorDelegate, DisplaySink};
pub use keypad::{BACK_LABEL, ButtonKind, ButtonSpec, KEYPAD, render_display, render_keypad};
