//! Setup error types.
//!
//! Validation failures are ordinary values (see
//! [`ValidationResult`](crate::validation::ValidationResult)); the errors here
//! only arise while wiring a form together.

use thiserror::Error;

use crate::field::FieldId;

/// Failure to assemble a [`FormSession`](crate::FormSession).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid {field} pattern: {source}")]
    Pattern {
        field: FieldId,
        #[source]
        source: regex::Error,
    },

    #[error("form has no fields")]
    EmptyForm,

    #[error("field '{field}' is listed in {list} but is not part of the form")]
    FieldNotInForm { field: FieldId, list: &'static str },

    #[error("field '{0}' has no presentation binding")]
    MissingBinding(FieldId),

    #[error("field '{0}' is bound more than once")]
    DuplicateBinding(FieldId),

    #[error("field '{0}' is bound but is not part of the form")]
    UnexpectedBinding(FieldId),
}
