//! ANSI palette shared by trace lines and the CLI.
//!
//! Colors are named after what they mark, not after their hue:
//! - `heading`: plan, buffer and end lines; section headers
//! - `item`: elements handed to the caller
//! - `muted`: source traffic (pulls, drops, exhaustion) and rules

/// Escape sequences for each role; all empty when colors are off.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub heading: &'static str,
    pub item: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Blue headings, green items, dim traffic.
    pub const ON: Self = Self {
        heading: "\x1b[34m",
        item: "\x1b[32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        heading: "",
        item: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
