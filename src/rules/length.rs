//! Length rule - rewards passwords longer than the baseline.

use secrecy::{ExposeSecret, SecretString};

const BASELINE_LENGTH: usize = 8;

/// Satisfied when the password is strictly longer than 8 characters.
pub fn length_rule(password: &SecretString) -> bool {
    password.expose_secret().chars().count() > BASELINE_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_exactly_baseline() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(!length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_above_baseline() {
        let pwd = SecretString::new("123456789".to_string().into());
        assert!(length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!length_rule(&pwd));
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // Nine characters, more than nine bytes.
        let pwd = SecretString::new("pässwörd!".to_string().into());
        assert!(length_rule(&pwd));
    }
}
