//! Keypad layout of the calculator screen.
//!
//! A 4x4 grid of digits and operators, a fifth row holding a double-width
//! `=` and the backspace key, and a separate `Back` button below.

use crate::calculator::{BACKSPACE_LABEL, Key};
use crate::ui::theme::{ANSI_RESET, CalculatorTheme, Rgb, theme};

/// Label of the button that returns to the home screen.
pub const BACK_LABEL: &str = "Back";

/// Left edge of the grid on the device screen, in pixels.
const GRID_LEFT: u16 = 10;
/// Top edge of the grid on the device screen, in pixels.
const GRID_TOP: u16 = 120;

/// Width of one button cell in text columns, brackets included.
const CELL_WIDTH: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Clear,
    Equals,
    Backspace,
    Navigation,
}

impl ButtonKind {
    pub fn color(self, t: &CalculatorTheme) -> Rgb {
        match self {
            Self::Digit => t.digit_button,
            Self::Operator => t.operator_button,
            Self::Clear => t.clear_button,
            Self::Equals => t.equals_button,
            Self::Backspace => t.backspace_button,
            Self::Navigation => t.navigation_button,
        }
    }
}

/// A button on the keypad grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub row: u16,
    pub col: u16,
    pub col_span: u16,
}

const fn button(label: &'static str, row: u16, col: u16) -> ButtonSpec {
    ButtonSpec {
        label,
        row,
        col,
        col_span: 1,
    }
}

pub const KEYPAD: &[ButtonSpec] = &[
    button("7", 0, 0),
    button("8", 0, 1),
    button("9", 0, 2),
    button("/", 0, 3),
    button("4", 1, 0),
    button("5", 1, 1),
    button("6", 1, 2),
    button("*", 1, 3),
    button("1", 2, 0),
    button("2", 2, 1),
    button("3", 2, 2),
    button("-", 2, 3),
    button("C", 3, 0),
    button("0", 3, 1),
    button(".", 3, 2),
    button("+", 3, 3),
    ButtonSpec {
        label: "=",
        row: 4,
        col: 0,
        col_span: 2,
    },
    button(BACKSPACE_LABEL, 4, 2),
];

/// Number of grid rows.
pub const KEYPAD_ROWS: u16 = 5;
/// Number of grid columns.
pub const KEYPAD_COLS: u16 = 4;

impl ButtonSpec {
    pub fn kind(&self) -> ButtonKind {
        match self.label.parse::<Key>() {
            Ok(Key::Digit(_) | Key::Decimal) => ButtonKind::Digit,
            Ok(Key::Operator(_)) => ButtonKind::Operator,
            Ok(Key::Clear) => ButtonKind::Clear,
            Ok(Key::Equals) => ButtonKind::Equals,
            Ok(Key::Backspace) => ButtonKind::Backspace,
            Err(_) => ButtonKind::Navigation,
        }
    }

    /// Position and size on the device screen as `(x, y, width, height)`.
    pub fn bounds(&self) -> (u16, u16, u16, u16) {
        let t = theme();
        let pitch = t.button_size + t.button_margin;
        let width = t.button_size * self.col_span + t.button_margin * (self.col_span - 1);
        (
            GRID_LEFT + self.col * pitch,
            GRID_TOP + self.row * pitch,
            width,
            t.button_size,
        )
    }

    fn render_cell(&self, color: bool) -> String {
        let span = usize::from(self.col_span);
        let inner = (CELL_WIDTH + 1) * span - 3;
        let cell = format!("[{:^inner$}]", self.label);
        if color {
            format!("{}{}{}", self.kind().color(theme()).ansi_background(), cell, ANSI_RESET)
        } else {
            cell
        }
    }
}

/// Width of the whole keypad in text columns.
pub fn keypad_width() -> usize {
    let cols = usize::from(KEYPAD_COLS);
    CELL_WIDTH * cols + cols - 1
}

/// Render the keypad as text, one line per grid row plus the back button.
pub fn render_keypad(color: bool) -> String {
    let mut lines = Vec::new();

    for row in 0..KEYPAD_ROWS {
        let mut buttons: Vec<&ButtonSpec> = KEYPAD.iter().filter(|b| b.row == row).collect();
        buttons.sort_by_key(|b| b.col);
        let cells: Vec<String> = buttons.iter().map(|b| b.render_cell(color)).collect();
        lines.push(cells.join(" "));
    }

    let back = ButtonSpec {
        label: BACK_LABEL,
        row: KEYPAD_ROWS,
        col: 0,
        col_span: 2,
    };
    let back_cell = back.render_cell(false);
    let pad = (keypad_width() - back_cell.chars().count()) / 2;
    let back_cell = if color {
        back.render_cell(true)
    } else {
        back_cell
    };
    lines.push(format!("{}{}", " ".repeat(pad), back_cell));

    lines.join("\n")
}

/// Render the display label, right aligned inside a box as wide as the keypad.
pub fn render_display(text: &str) -> String {
    let inner = keypad_width() - 2;
    format!("|{:>inner$}|", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_label_is_a_key() {
        for button in KEYPAD {
            assert!(button.label.parse::<Key>().is_ok(), "{}", button.label);
        }
        assert!(BACK_LABEL.parse::<Key>().is_err());
    }

    #[test]
    fn test_button_kinds() {
        let kind = |label: &str| KEYPAD.iter().find(|b| b.label == label).unwrap().kind();
        assert_eq!(kind("7"), ButtonKind::Digit);
        assert_eq!(kind("."), ButtonKind::Digit);
        assert_eq!(kind("/"), ButtonKind::Operator);
        assert_eq!(kind("C"), ButtonKind::Clear);
        assert_eq!(kind("="), ButtonKind::Equals);
        assert_eq!(kind("←"), ButtonKind::Backspace);
    }

    #[test]
    fn test_kind_colors() {
        let t = theme();
        assert_eq!(ButtonKind::Operator.color(t), Rgb(41, 121, 255));
        assert_eq!(ButtonKind::Clear.color(t), Rgb(255, 59, 48));
        assert_eq!(ButtonKind::Equals.color(t), Rgb(52, 199, 89));
    }

    #[test]
    fn test_button_bounds() {
        assert_eq!(KEYPAD[0].bounds(), (10, 120, 50, 50));
        assert_eq!(KEYPAD[15].bounds(), (175, 285, 50, 50));
        // Double-width equals on the fifth row.
        assert_eq!(KEYPAD[16].bounds(), (10, 340, 105, 50));
    }

    #[test]
    fn test_render_keypad_plain() {
        let rendered = render_keypad(false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[ 7 ] [ 8 ] [ 9 ] [ / ]");
        assert_eq!(lines[3], "[ C ] [ 0 ] [ . ] [ + ]");
        assert_eq!(lines[4], "[    =    ] [ ← ]");
        assert_eq!(lines[5], "      [  Back   ]");
    }

    #[test]
    fn test_render_display_right_aligned() {
        assert_eq!(render_display("42"), "|                   42|");
        assert_eq!(render_display("42").chars().count(), keypad_width());
    }
}
