//! Calculator applet of a small touchscreen home-screen launcher.
//!
//! The [`calculator`] module holds the input state machine and evaluator,
//! [`ui`] wires it to a display and keypad, and [`config`] loads user
//! settings.

pub mod calculator;
pub mod config;
pub mod ui;
