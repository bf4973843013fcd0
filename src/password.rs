//! Password strength classification
//!
//! Independent of the expiry calculation. Strength is the number of criteria
//! met: at least 8 characters, contains a digit, contains an uppercase letter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for the length criterion
pub const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordStrength {
    Invalid,
    Weak,
    Normal,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Invalid => "INVALID",
            PasswordStrength::Weak => "WEAK",
            PasswordStrength::Normal => "NORMAL",
            PasswordStrength::Strong => "STRONG",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordStrengthMeter;

impl PasswordStrengthMeter {
    pub fn new() -> Self {
        Self
    }

    pub fn meter(&self, password: Option<&str>) -> PasswordStrength {
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return PasswordStrength::Invalid,
        };

        match met_criteria_count(password) {
            0 | 1 => PasswordStrength::Weak,
            2 => PasswordStrength::Normal,
            _ => PasswordStrength::Strong,
        }
    }
}

fn met_criteria_count(password: &str) -> usize {
    [
        password.chars().count() >= MIN_LENGTH,
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(char::is_uppercase),
    ]
    .iter()
    .filter(|&&met| met)
    .count()
}
