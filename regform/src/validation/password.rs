use serde::{Deserialize, Serialize};

use super::rules::Rules;

/// Password requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Require at least one ASCII digit.
    pub require_digit: bool,
    /// Require at least one letter.
    pub require_letter: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_digit: true,
            require_letter: true,
        }
    }
}

impl PasswordPolicy {
    /// Build the rule chain for this policy.
    pub fn rules(&self) -> Rules {
        let mut rules = Rules::new().required("Password is required").min_chars(
            self.min_length,
            format!("Password must be at least {} characters", self.min_length),
        );
        if self.require_digit {
            rules = rules.any_char(
                |c| c.is_ascii_digit(),
                "Password must contain at least one digit",
            );
        }
        if self.require_letter {
            rules = rules.any_char(char::is_alphabetic, "Password must contain at least one letter");
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationResult;

    #[test]
    fn test_default_policy() {
        let rules = PasswordPolicy::default().rules();
        assert_eq!(
            rules.evaluate(""),
            ValidationResult::Invalid("Password is required".into())
        );
        assert_eq!(
            rules.evaluate("abc1"),
            ValidationResult::Invalid("Password must be at least 8 characters".into())
        );
        assert_eq!(
            rules.evaluate("abcdefgh"),
            ValidationResult::Invalid("Password must contain at least one digit".into())
        );
        assert_eq!(
            rules.evaluate("12345678"),
            ValidationResult::Invalid("Password must contain at least one letter".into())
        );
        assert_eq!(rules.evaluate("secreto99"), ValidationResult::Valid);
    }

    #[test]
    fn test_relaxed_policy() {
        let policy = PasswordPolicy {
            min_length: 4,
            require_digit: false,
            require_letter: false,
        };
        assert_eq!(policy.rules().evaluate("1234"), ValidationResult::Valid);
        assert_eq!(policy.rules().len(), 2);
    }

    #[test]
    fn test_surrounding_spaces_count() {
        let rules = PasswordPolicy::default().rules();
        assert_eq!(rules.evaluate(" abc12  "), ValidationResult::Valid);
    }
}
