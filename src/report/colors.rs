//! ANSI color codes for terminal output

/// ANSI color codes for report rendering
pub struct Colors {
    pub blue: &'static str,
    pub yellow: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::with_color()
        } else {
            Self::no_color()
        }
    }

    pub fn with_color() -> Self {
        Self {
            blue: "\u{1b}[34m",
            yellow: "\u{1b}[33m",
            reset: "\u{1b}[0m",
        }
    }

    pub fn no_color() -> Self {
        Self {
            blue: "",
            yellow: "",
            reset: "",
        }
    }
}
