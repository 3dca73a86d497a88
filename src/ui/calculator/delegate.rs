//! Calculator screen delegate.
//!
//! Bridges button clicks from the UI layer to the calculator state machine
//! and pushes the display text back out after every press.

use crate::calculator::{Calculator, Key, copy_to_clipboard};
use std::sync::Arc;
use tracing::{info, warn};

/// Receiver of the calculator's display text, usually an on-screen label.
pub trait DisplaySink {
    fn set_display_text(&mut self, text: &str);
}

/// Delegate owning the calculator state for one visit to the screen.
pub struct CalculatorDelegate<D: DisplaySink> {
    calculator: Calculator,
    display: D,
    copy_on_equals: bool,
    on_back: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl<D: DisplaySink> CalculatorDelegate<D> {
    pub fn new(calculator: Calculator, display: D) -> Self {
        Self {
            calculator,
            display,
            copy_on_equals: false,
            on_back: None,
        }
    }

    /// Copy each successful `=` result to the clipboard.
    pub fn with_copy_on_equals(mut self, enabled: bool) -> Self {
        self.copy_on_equals = enabled;
        self
    }

    /// Set callback for returning to the home screen.
    pub fn set_on_back(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.on_back = Some(Arc::new(callback));
    }

    /// The screen was (re)built: reset the calculator and show `0`.
    pub fn enter(&mut self) {
        info!("calculator screen opened");
        self.calculator.reset();
        self.display.set_display_text(self.calculator.display());
    }

    /// A calculator button was clicked.
    ///
    /// Labels that are not calculator keys leave the state unchanged. The
    /// display is refreshed either way.
    pub fn press(&mut self, label: &str) {
        match label.parse::<Key>() {
            Ok(key) => {
                self.calculator.handle_key(key);
                if key == Key::Equals && self.copy_on_equals && !self.calculator.is_error() {
                    self.copy_display();
                }
            }
            Err(err) => warn!(%err, "ignoring button"),
        }

        self.display.set_display_text(self.calculator.display());
    }

    /// Copy the current display text to the clipboard.
    pub fn copy_display(&self) {
        if let Err(err) = copy_to_clipboard(self.calculator.display()) {
            warn!(%err, "could not copy result");
        }
    }

    /// Back button: leave the screen and return home.
    pub fn do_back(&mut self) {
        info!("calculator screen closed");
        self.calculator.reset();
        if let Some(ref on_back) = self.on_back {
            on_back();
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingDisplay {
        updates: Vec<String>,
    }

    impl DisplaySink for RecordingDisplay {
        fn set_display_text(&mut self, text: &str) {
            self.updates.push(text.to_string());
        }
    }

    fn delegate() -> CalculatorDelegate<RecordingDisplay> {
        CalculatorDelegate::new(Calculator::new(), RecordingDisplay::default())
    }

    #[test]
    fn test_enter_shows_zero() {
        let mut delegate = delegate();
        delegate.enter();
        assert_eq!(delegate.display().updates, vec!["0"]);
    }

    #[test]
    fn test_every_press_updates_display() {
        let mut delegate = delegate();
        for label in ["5", "+", "3", "=", "="] {
            delegate.press(label);
        }
        assert_eq!(delegate.display().updates, vec!["5", "5", "3", "8", "8"]);
    }

    #[test]
    fn test_unknown_label_still_refreshes() {
        let mut delegate = delegate();
        delegate.press("4");
        delegate.press("%");
        assert_eq!(delegate.calculator().display(), "4");
        assert_eq!(delegate.display().updates, vec!["4", "4"]);
    }

    #[test]
    fn test_division_by_zero_displayed() {
        let mut delegate = delegate();
        for label in ["1", "0", "/", "0", "="] {
            delegate.press(label);
        }
        assert_eq!(delegate.display().updates.last().unwrap(), "Error");
    }

    #[test]
    fn test_reenter_resets_state() {
        let mut delegate = delegate();
        for label in ["7", "*", "6"] {
            delegate.press(label);
        }
        delegate.enter();
        assert_eq!(delegate.calculator().display(), "0");
        assert_eq!(delegate.calculator().stored(), 0.0);
        assert_eq!(delegate.calculator().pending(), None);
    }

    #[test]
    fn test_back_returns_home() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut delegate = delegate();
        let counter = Arc::clone(&calls);
        delegate.set_on_back(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        delegate.press("9");
        delegate.do_back();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(delegate.calculator().display(), "0");
    }

    #[test]
    fn test_back_without_callback() {
        let mut delegate = delegate();
        delegate.press("9");
        delegate.do_back();
        assert_eq!(delegate.calculator().display(), "0");
    }
}
