//! Rule chains for a single field.

use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use regex::Regex;

use super::result::ValidationResult;

/// Type alias for rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Ordered rules for one field.
///
/// Evaluation stops at the first failing rule.
///
/// # Example
///
/// ```
/// use regform::validation::{Rules, ValidationResult};
///
/// let rules = Rules::new()
///     .required("Code is required")
///     .min_chars(4, "Code must be at least 4 characters");
///
/// assert_eq!(
///     rules.evaluate("ab"),
///     ValidationResult::Invalid("Code must be at least 4 characters".into())
/// );
/// ```
#[derive(Default)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// Create an empty chain (every value passes).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule whose message depends on the value.
    pub fn check<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(f));
        self
    }

    /// Add a predicate rule with a fixed message.
    pub fn rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.check(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) })
    }

    /// Require a non-empty value.
    ///
    /// Whitespace counts as content; callers trim beforehand when the field
    /// calls for it.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require at least `min` characters.
    pub fn min_chars(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require the value to match a pattern.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require at least one character satisfying `pred`.
    pub fn any_char(self, pred: fn(char) -> bool, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().any(pred), msg)
    }

    /// Require a base-10 integer inside `range`.
    ///
    /// Integers too large to represent count as out of range.
    pub fn integer_in_range(
        self,
        range: RangeInclusive<i64>,
        not_integer: impl Into<String>,
        out_of_range: impl Into<String>,
    ) -> Self {
        let not_integer = not_integer.into();
        let out_of_range = out_of_range.into();
        self.check(move |v| match v.parse::<i64>() {
            Ok(n) if range.contains(&n) => Ok(()),
            Ok(_) => Err(out_of_range.clone()),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(out_of_range.clone())
                }
                _ => Err(not_integer.clone()),
            },
        })
    }

    /// Run the chain against `value`.
    pub fn evaluate(&self, value: &str) -> ValidationResult {
        self.rules
            .iter()
            .find_map(|rule| rule(value).err())
            .map_or(ValidationResult::Valid, ValidationResult::Invalid)
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules").field("len", &self.rules.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn invalid(msg: &str) -> ValidationResult {
        ValidationResult::Invalid(msg.to_string())
    }

    #[test]
    fn test_empty_chain_accepts_anything() {
        assert_eq!(Rules::new().evaluate(""), ValidationResult::Valid);
    }

    #[test]
    fn test_first_failure_wins() {
        let rules = Rules::new()
            .required("required")
            .min_chars(3, "too short");
        assert_eq!(rules.evaluate(""), invalid("required"));
        assert_eq!(rules.evaluate("ab"), invalid("too short"));
        assert_eq!(rules.evaluate("abc"), ValidationResult::Valid);
    }

    #[test]
    fn test_later_rules_are_not_run_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rules = Rules::new().required("required").rule(
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            },
            "unused",
        );

        rules.evaluate("");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        rules.evaluate("x");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        let rules = Rules::new().min_chars(2, "short");
        assert_eq!(rules.evaluate("ñ"), invalid("short"));
        assert_eq!(rules.evaluate("ñó"), ValidationResult::Valid);
        // One scalar value, even outside the BMP.
        assert_eq!(rules.evaluate("\u{1D49C}"), invalid("short"));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let rules = Rules::new().required("required");
        assert_eq!(rules.evaluate(" "), ValidationResult::Valid);
    }

    #[test]
    fn test_integer_in_range() {
        let rules = Rules::new().integer_in_range(1..=10, "nan", "range");
        assert_eq!(rules.evaluate("1"), ValidationResult::Valid);
        assert_eq!(rules.evaluate("10"), ValidationResult::Valid);
        assert_eq!(rules.evaluate("0"), invalid("range"));
        assert_eq!(rules.evaluate("-3"), invalid("range"));
        assert_eq!(rules.evaluate("99999999999999999999"), invalid("range"));
        assert_eq!(rules.evaluate("2.5"), invalid("nan"));
        assert_eq!(rules.evaluate("ten"), invalid("nan"));
    }
}
