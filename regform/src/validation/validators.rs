//! Per-field rule chains for the registration form.

use std::ops::RangeInclusive;

use regex::Regex;

use super::result::ValidationResult;
use super::rules::Rules;
use crate::config::FormConfig;
use crate::error::SetupError;
use crate::field::FieldId;

/// Letters (with the Spanish accented set) and whitespace only.
///
/// Whitespace includes U+FEFF, as in browser regexes.
pub const NAME_PATTERN: &str = r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s\x{FEFF}]+$";

/// `local@domain.tld`, each part free of whitespace and `@`.
pub const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

/// Accepted ages, inclusive.
pub const AGE_RANGE: RangeInclusive<i64> = 1..=120;

/// Error messages shown next to the fields.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
    pub const NAME_CHARSET: &str = "Name may only contain letters and spaces";
    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_INVALID: &str = "Enter a valid email (example@mail.com)";
    pub const AGE_REQUIRED: &str = "Age is required";
    pub const AGE_NOT_INTEGER: &str = "Age must be a whole number";
    pub const AGE_OUT_OF_RANGE: &str = "Enter a valid age (1-120)";
    pub const SEX_REQUIRED: &str = "Select an option";
}

/// One rule chain per field.
#[derive(Debug)]
pub struct Validators {
    name: Rules,
    email: Rules,
    password: Rules,
    age: Rules,
    sex: Rules,
}

impl Validators {
    /// Build the validators for `config`.
    pub fn new(config: &FormConfig) -> Result<Self, SetupError> {
        let name_re = compile(FieldId::Name, NAME_PATTERN)?;
        let email_re = compile(FieldId::Email, EMAIL_PATTERN)?;

        Ok(Self {
            name: Rules::new()
                .required(messages::NAME_REQUIRED)
                .min_chars(2, messages::NAME_TOO_SHORT)
                .pattern(name_re, messages::NAME_CHARSET),
            email: Rules::new()
                .required(messages::EMAIL_REQUIRED)
                .pattern(email_re, messages::EMAIL_INVALID),
            password: config.password.rules(),
            age: Rules::new().required(messages::AGE_REQUIRED).integer_in_range(
                AGE_RANGE,
                messages::AGE_NOT_INTEGER,
                messages::AGE_OUT_OF_RANGE,
            ),
            sex: Rules::new().required(messages::SEX_REQUIRED),
        })
    }

    /// Validate `value` as the content of `field`.
    ///
    /// The value is used exactly as given.
    pub fn validate(&self, field: FieldId, value: &str) -> ValidationResult {
        self.rules(field).evaluate(value)
    }

    /// The rule chain backing `field`.
    pub fn rules(&self, field: FieldId) -> &Rules {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Age => &self.age,
            FieldId::Sex => &self.sex,
        }
    }
}

fn compile(field: FieldId, pattern: &str) -> Result<Regex, SetupError> {
    Regex::new(pattern).map_err(|source| SetupError::Pattern { field, source })
}
