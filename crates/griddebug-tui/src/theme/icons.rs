//! Icon set for the TUI.
//!
//! Resolves icons at runtime from the `ui.icons` setting: unicode glyphs
//! when enabled, plain ASCII when the terminal font cannot be trusted.

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    unicode: bool,
}

/// Braille spinner frames for the loading indicator.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl IconSet {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn bolt(&self) -> &'static str {
        if self.unicode {
            "\u{26a1}" // ⚡
        } else {
            ">"
        }
    }

    pub fn dot(&self) -> &'static str {
        if self.unicode {
            "\u{25cf}" // ●
        } else {
            "*"
        }
    }

    pub fn circle(&self) -> &'static str {
        if self.unicode {
            "\u{25cb}" // ○
        } else {
            "o"
        }
    }

    pub fn check(&self) -> &'static str {
        if self.unicode {
            "\u{2713}" // ✓
        } else {
            "+"
        }
    }

    pub fn cross(&self) -> &'static str {
        if self.unicode {
            "\u{2717}" // ✗
        } else {
            "x"
        }
    }

    pub fn alert(&self) -> &'static str {
        if self.unicode {
            "\u{26a0}" // ⚠
        } else {
            "!"
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        if self.unicode {
            "\u{203a}" // ›
        } else {
            ">"
        }
    }

    /// Spinner glyph for the given animation frame.
    pub fn spinner(&self, frame: u8) -> &'static str {
        if self.unicode {
            SPINNER_FRAMES[frame as usize % SPINNER_FRAMES.len()]
        } else {
            ["|", "/", "-", "\\"][frame as usize % 4]
        }
    }
}
