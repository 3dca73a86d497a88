//! Colors of the calculator screen.

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// ANSI escape selecting this color as the terminal background.
    pub fn ansi_background(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

#[derive(Clone, Debug)]
pub struct CalculatorTheme {
    pub background: Rgb,
    pub display_background: Rgb,
    pub text: Rgb,
    pub digit_button: Rgb,
    pub operator_button: Rgb,
    pub clear_button: Rgb,
    pub equals_button: Rgb,
    pub backspace_button: Rgb,
    pub navigation_button: Rgb,
    /// Button edge length in pixels on the device screen.
    pub button_size: u16,
    pub button_margin: u16,
}

static THEME: CalculatorTheme = CalculatorTheme {
    background: Rgb(30, 30, 40),
    display_background: Rgb(20, 20, 25),
    text: Rgb(255, 255, 255),
    digit_button: Rgb(50, 50, 70),
    operator_button: Rgb(41, 121, 255),
    clear_button: Rgb(255, 59, 48),
    equals_button: Rgb(52, 199, 89),
    backspace_button: Rgb(255, 149, 0),
    navigation_button: Rgb(80, 80, 100),
    button_size: 50,
    button_margin: 5,
};

pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
