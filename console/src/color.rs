use core::sync::atomic::Ordering;

use disco_common::TermColor;

use crate::console::Console;

/// ANSI escape for `color`: bold foreground on black, or attribute reset
pub fn escape(color: TermColor) -> &'static str {
    match color {
        TermColor::Red => "\x1b[31;40;1m",
        TermColor::Green => "\x1b[32;40;1m",
        TermColor::Yellow => "\x1b[33;40;1m",
        TermColor::Blue => "\x1b[34;40;1m",
        TermColor::Magenta => "\x1b[35;40;1m",
        TermColor::Cyan => "\x1b[36;40;1m",
        TermColor::White => "\x1b[37;40;1m",
        TermColor::None => "\x1b[0m",
    }
}

impl Console {
    /// Escape sequence for `color`, empty while color output is disabled
    pub fn color(&self, color: TermColor) -> &'static str {
        if self.color_enabled() {
            escape(color)
        } else {
            ""
        }
    }

    pub fn color_enable(&self) {
        self.color.store(true, Ordering::Relaxed);
    }

    pub fn color_disable(&self) {
        self.color.store(false, Ordering::Relaxed);
    }

    pub fn color_enabled(&self) -> bool {
        self.color.load(Ordering::Relaxed)
    }
}
