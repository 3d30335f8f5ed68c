//! ANSI color codes for terminal output.
//!
//! - Green: passing verdicts, token text
//! - Red: failing verdicts
//! - Blue: rule names
//! - Dim: token kinds, indentation guides

/// ANSI palette shared by the dump printer and the CLI verdict lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub green: &'static str,
    pub red: &'static str,
    pub blue: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        green: "\x1b[32m",
        red: "\x1b[31m",
        blue: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        green: "",
        red: "",
        blue: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
