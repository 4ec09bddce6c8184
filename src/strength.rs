//! Strength scorer - counts satisfied rules and maps them to a level.

use secrecy::SecretString;

use crate::rules::{Rule, digit_rule, length_rule, symbol_rule, uppercase_rule};
use crate::types::StrengthLevel;

/// Scores a password against the four independent rules.
///
/// Pure and total: never fails, and the result depends only on the complete
/// current password.
///
/// # Returns
/// The [`StrengthLevel`] for the number of satisfied rules (0..=4).
pub fn score_password(password: &SecretString) -> StrengthLevel {
    let rules: [Rule; 4] = [length_rule, uppercase_rule, digit_rule, symbol_rule];

    let satisfied = rules.iter().filter(|rule| rule(password)).count();
    StrengthLevel::from_count(satisfied)
}
