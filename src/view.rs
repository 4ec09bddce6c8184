//! View binding - the UI seam.
//!
//! The original surface is an injected trait so the scorer and checker are
//! testable without a live UI; [`ConsoleView`] is the shipped binding.

use std::io::Write;
use std::sync::Mutex;

use crate::types::{BreachStatus, StrengthLevel, Tone};

/// UI handles the monitor writes to.
///
/// Implementations are only ever called from the runtime driving the
/// monitor; interior mutability keeps the methods `&self`.
pub trait View: Send + Sync {
    /// Updates the strength bar fill/color and the strength label.
    fn render_strength(&self, level: StrengthLevel);

    /// Updates the breach status line and its color.
    fn render_breach(&self, status: BreachStatus);

    /// Masks or reveals the password input.
    fn set_masked(&self, masked: bool);
}

const BAR_WIDTH: usize = 20;

fn ansi_code(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "90",
        Tone::Red => "31",
        Tone::Orange => "33",
        Tone::Yellow => "93",
        Tone::Green => "32",
    }
}

/// Renders the bar and status lines to a terminal with ANSI colors.
pub struct ConsoleView {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ConsoleView {
    fn render_strength(&self, level: StrengthLevel) {
        let filled = BAR_WIDTH * usize::from(level.fill_percent()) / 100;
        let bar: String = std::iter::repeat_n('#', filled)
            .chain(std::iter::repeat_n('-', BAR_WIDTH - filled))
            .collect();

        let mut out = self.out.lock().unwrap();
        let _ = writeln!(
            out,
            "\x1b[{}m[{}]\x1b[0m {}",
            ansi_code(level.tone()),
            bar,
            level.label()
        );
    }

    fn render_breach(&self, status: BreachStatus) {
        let mut out = self.out.lock().unwrap();
        let _ = writeln!(
            out,
            "\x1b[{}m{}\x1b[0m",
            ansi_code(status.tone()),
            status.message()
        );
    }

    fn set_masked(&self, masked: bool) {
        let mut out = self.out.lock().unwrap();
        let _ = writeln!(out, "input {}", if masked { "masked" } else { "visible" });
    }
}
