//! Password Strength
//!
//! A four-point heuristic shared by the registration flow, the dev server,
//! the CLI and the frontend strength meter.

use serde::Serialize;

/// Minimum score accepted by registration
pub const MIN_ACCEPTED_SCORE: u8 = 2;

/// Score a candidate password in `0..=4`.
///
/// One point each for:
/// - at least 8 characters
/// - both an ASCII lowercase and an ASCII uppercase letter
/// - an ASCII digit
/// - any character that is not an ASCII letter or digit
///
/// No normalization is applied; whitespace and non-ASCII characters count
/// toward the last category.
pub fn score(password: &str) -> u8 {
    let mut score = 0;

    if password.chars().count() >= 8 {
        score += 1;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }

    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Display label for a strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Map a score to its label. A score of 0 suppresses the label.
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => None,
            1 | 2 => Some(Self::Weak),
            3 => Some(Self::Medium),
            _ => Some(Self::Strong),
        }
    }

    /// CSS class used by the strength indicator
    pub fn class(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Indicator text
    pub fn text(&self) -> &'static str {
        match self {
            Self::Weak => "Weak Password",
            Self::Medium => "Medium Password",
            Self::Strong => "Strong Password",
        }
    }

    /// Indicator color
    pub fn color(&self) -> &'static str {
        match self {
            Self::Weak => "#ec4899",
            Self::Medium => "#f59e0b",
            Self::Strong => "#00d4ff",
        }
    }
}

/// Score plus label, as reported by the API and CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub score: u8,
    pub label: Option<StrengthLabel>,
}

impl Strength {
    pub fn of(password: &str) -> Self {
        let score = score(password);
        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }

    /// Whether registration accepts this password
    pub fn is_acceptable(&self) -> bool {
        self.score >= MIN_ACCEPTED_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scores() {
        assert_eq!(score(""), 0);
        assert_eq!(score("abcdefgh"), 1);
        assert_eq!(score("Abcdefgh"), 2);
        assert_eq!(score("Abcdefg1"), 3);
        assert_eq!(score("Abcdefg1!"), 4);
    }

    #[test]
    fn test_categories_are_independent() {
        assert_eq!(score("A"), 0);
        assert_eq!(score("aB"), 1);
        assert_eq!(score("7"), 1);
        assert_eq!(score("#"), 1);
        assert_eq!(score("aB7#"), 3);
    }

    #[test]
    fn test_adding_a_category_never_lowers_score() {
        let base = "abcdefgh";
        let mut previous = score(base);
        for extra in ["X", "9", "!"] {
            let next = format!("{}{}", base, extra);
            assert!(score(&next) >= previous);
            previous = score(&next);
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn test_non_ascii_counts_as_special() {
        assert_eq!(score("é"), 1);
        assert_eq!(score("pass word"), 2);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(score("ééééééé"), 1);
        assert_eq!(score("éééééééé"), 2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StrengthLabel::from_score(0), None);
        assert_eq!(StrengthLabel::from_score(1), Some(StrengthLabel::Weak));
        assert_eq!(StrengthLabel::from_score(2), Some(StrengthLabel::Weak));
        assert_eq!(StrengthLabel::from_score(3), Some(StrengthLabel::Medium));
        assert_eq!(StrengthLabel::from_score(4), Some(StrengthLabel::Strong));
    }

    #[test]
    fn test_acceptance_threshold() {
        assert!(!Strength::of("abcdefgh").is_acceptable());
        assert!(Strength::of("Abcdefgh").is_acceptable());
    }
}
