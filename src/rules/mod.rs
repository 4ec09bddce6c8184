//! Strength rules
//!
//! Each rule checks one independent aspect of the password; the scorer
//! counts how many are satisfied.

mod length;
mod variety;

pub use length::length_rule;
pub use variety::{digit_rule, symbol_rule, uppercase_rule};

/// A rule returns `true` when its aspect is satisfied.
pub type Rule = fn(&secrecy::SecretString) -> bool;
