//! Password strength scoring.

use regex::Regex;

/// Minimum password length counted toward the score.
const MIN_LENGTH: usize = 8;

/// Scores candidate passwords against five independent criteria: length,
/// uppercase, lowercase, digit, and a symbol from a fixed set. Each
/// criterion met adds one point.
///
/// The character-class patterns are compiled once at construction; reuse
/// one policy across keystrokes.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    uppercase: Regex,
    lowercase: Regex,
    digit: Regex,
    symbol: Regex,
}

impl PasswordPolicy {
    /// Create the standard policy.
    pub fn new() -> Self {
        Self {
            uppercase: Regex::new(r"[A-Z]").unwrap(),
            lowercase: Regex::new(r"[a-z]").unwrap(),
            digit: Regex::new(r"\d").unwrap(),
            symbol: Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap(),
        }
    }

    /// Score a candidate password.
    pub fn check(&self, password: &str) -> PasswordStrength {
        let mut score = 0;
        let mut feedback = Vec::new();

        if password.chars().count() >= MIN_LENGTH {
            score += 1;
        } else {
            feedback.push("At least 8 characters");
        }

        if self.uppercase.is_match(password) {
            score += 1;
        } else {
            feedback.push("At least one uppercase letter");
        }

        if self.lowercase.is_match(password) {
            score += 1;
        } else {
            feedback.push("At least one lowercase letter");
        }

        if self.digit.is_match(password) {
            score += 1;
        } else {
            feedback.push("At least one number");
        }

        if self.symbol.is_match(password) {
            score += 1;
        } else {
            feedback.push("At least one special character");
        }

        PasswordStrength { score, feedback }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    /// Number of criteria met, 0 through 5
    pub score: u8,
    /// Human-readable lines for each unmet criterion, in check order
    pub feedback: Vec<&'static str>,
}

impl PasswordStrength {
    /// Strength level label for this score.
    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }
}

/// Five-level strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    /// Score 0-1
    VeryWeak,
    /// Score 2
    Weak,
    /// Score 3
    Fair,
    /// Score 4
    Good,
    /// Score 5
    Strong,
}

impl StrengthLevel {
    /// Classify a criteria score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Fair,
            4 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    /// Display label for the strength meter.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// CSS class styling the strength meter text.
    pub fn css_class(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "text-danger",
            StrengthLevel::Weak => "text-warning",
            StrengthLevel::Fair => "text-info",
            StrengthLevel::Good => "text-success",
            StrengthLevel::Strong => "text-success fw-bold",
        }
    }
}
