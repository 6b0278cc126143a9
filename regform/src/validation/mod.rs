//! Field validation for the registration form.
//!
//! Every field has a chain of [`Rules`] evaluated in order; the first failing
//! rule's message is the result. Validators are pure: they never trim, read
//! state, or touch the presentation.
//!
//! # Example
//!
//! ```
//! use regform::config::FormConfig;
//! use regform::field::FieldId;
//! use regform::validation::{ValidationResult, Validators};
//!
//! let validators = Validators::new(&FormConfig::default()).unwrap();
//!
//! assert_eq!(validators.validate(FieldId::Age, "42"), ValidationResult::Valid);
//! assert!(validators.validate(FieldId::Email, "bad-email").is_invalid());
//! ```

mod password;
mod result;
mod rules;
mod validators;

pub use password::PasswordPolicy;
pub use result::{FieldError, SubmissionResult, ValidationResult};
pub use rules::Rules;
pub use validators::{AGE_RANGE, EMAIL_PATTERN, NAME_PATTERN, Validators, messages};
