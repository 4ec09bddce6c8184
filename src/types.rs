//! Core value types shared across the scorer, the breach checker and views.

/// Semantic color a view maps onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Red,
    Orange,
    Yellow,
    Green,
}

/// Discrete strength level derived from the number of satisfied rules.
///
/// Always re-derived from the complete current password, never accumulated
/// across keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Maps a satisfied-rule count (0..=4) to a level.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => StrengthLevel::None,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Fair,
            3 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    /// Display label; empty for `None`.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::None => "",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Proportional bar fill, 0..=100.
    pub fn fill_percent(&self) -> u8 {
        match self {
            StrengthLevel::None => 0,
            StrengthLevel::Weak => 25,
            StrengthLevel::Fair => 50,
            StrengthLevel::Good => 75,
            StrengthLevel::Strong => 100,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            StrengthLevel::None => Tone::Neutral,
            StrengthLevel::Weak => Tone::Red,
            StrengthLevel::Fair => Tone::Orange,
            StrengthLevel::Good => Tone::Yellow,
            StrengthLevel::Strong => Tone::Green,
        }
    }
}

/// Successful outcome of a single range lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachVerdict {
    Breached,
    NotBreached,
}

/// Rendered breach state.
///
/// `Unknown` is the cleared/initial state; `Error` covers any failed lookup.
/// Computed, displayed, discarded: nothing is cached between checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Unknown,
    Breached,
    NotBreached,
    Error,
}

impl BreachStatus {
    /// User-facing status line; empty for `Unknown`.
    pub fn message(&self) -> &'static str {
        match self {
            BreachStatus::Unknown => "",
            BreachStatus::Breached => {
                "Warning: This password has been found in a data breach!"
            }
            BreachStatus::NotBreached => {
                "Good news: This password has not been found in any known data breaches."
            }
            BreachStatus::Error => "Error checking password breach.",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BreachStatus::Unknown => Tone::Neutral,
            BreachStatus::Breached | BreachStatus::Error => Tone::Red,
            BreachStatus::NotBreached => Tone::Green,
        }
    }
}

impl From<BreachVerdict> for BreachStatus {
    fn from(verdict: BreachVerdict) -> Self {
        match verdict {
            BreachVerdict::Breached => BreachStatus::Breached,
            BreachVerdict::NotBreached => BreachStatus::NotBreached,
        }
    }
}
