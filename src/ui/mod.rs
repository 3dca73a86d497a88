pub mod calculator;
pub mod terminal;
pub mod theme;

pub use calculator::{CalculatorDelegate, DisplaySink};
pub use terminal::{SessionOutcome, TerminalDisplay, run_session};
pub use theme::{CalculatorTheme, theme};
