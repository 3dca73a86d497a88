//! Line-oriented terminal front-end for the calculator screen.
//!
//! Each whitespace-separated token read from the input is a button label.
//! `back` or `q` presses the Back button, `copy` copies the display, and
//! `keypad` redraws the keypad.

use crate::config::Config;
use crate::ui::calculator::{BACK_LABEL, CalculatorDelegate, DisplaySink, render_display, render_keypad};
use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes display updates to a terminal, remembering the last text shown.
pub struct TerminalDisplay<W: Write> {
    out: W,
    last: String,
    error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: String::new(),
            error: None,
        }
    }

    /// The text most recently pushed to the display.
    pub fn last_text(&self) -> &str {
        &self.last
    }

    pub fn write_keypad(&mut self, color: bool) {
        let keypad = render_keypad(color);
        self.write_line(&keypad);
    }

    /// First write error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", line).and_then(|()| self.out.flush()) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn set_display_text(&mut self, text: &str) {
        self.last.clear();
        self.last.push_str(text);
        self.write_line(&render_display(text));
    }
}

/// How a terminal session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The text on the display before the screen was left.
    pub last_display: String,
    /// Whether the session ended through the Back button.
    pub returned_home: bool,
}

/// Run one visit to the calculator screen over `input` and `output`.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &Config,
    color: bool,
) -> anyhow::Result<SessionOutcome> {
    let returned_home = Arc::new(AtomicBool::new(false));

    let mut delegate = CalculatorDelegate::new(config.calculator.build(), TerminalDisplay::new(output))
        .with_copy_on_equals(config.session.copy_on_equals);

    let flag = Arc::clone(&returned_home);
    delegate.set_on_back(move || flag.store(true, Ordering::SeqCst));

    if config.session.show_keypad {
        delegate.display_mut().write_keypad(color);
    }
    delegate.enter();

    let mut last_display = String::new();
    'lines: for line in input.lines() {
        let line = line.context("failed to read input")?;

        for token in line.split_whitespace() {
            match token {
                "back" | "q" | BACK_LABEL => {
                    last_display = delegate.display().last_text().to_string();
                    delegate.do_back();
                }
                "copy" => delegate.copy_display(),
                "keypad" => delegate.display_mut().write_keypad(color),
                label => delegate.press(label),
            }

            if let Some(err) = delegate.display_mut().take_error() {
                return Err(err).context("failed to write display");
            }
            if returned_home.load(Ordering::SeqCst) {
                break 'lines;
            }
        }
    }

    let returned_home = returned_home.load(Ordering::SeqCst);
    if !returned_home {
        last_display = delegate.display().last_text().to_string();
    }

    Ok(SessionOutcome {
        last_display,
        returned_home,
    })
}
