//! Character variety rules - uppercase, digit and symbol presence.

use secrecy::{ExposeSecret, SecretString};

/// Satisfied when the password contains at least one ASCII uppercase letter.
pub fn uppercase_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// Satisfied when the password contains at least one ASCII digit.
pub fn digit_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Satisfied when the password contains at least one character outside
/// `[A-Za-z0-9]`.
pub fn symbol_rule(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
}
