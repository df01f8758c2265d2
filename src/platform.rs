//! Keyboard shortcut labels shown in the help bar
//!
//! Control chords are used everywhere: on macOS the Cmd key is usually
//! swallowed by the terminal emulator.

pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const QUIT_SHORTCUT: &str = "Ctrl+Q";

pub const CLEAR_SHORTCUT: &str = "Ctrl+U";
