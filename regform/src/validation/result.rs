use crate::field::FieldId;

/// Outcome of validating one field value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value passed every rule.
    #[default]
    Valid,
    /// The first failing rule's message.
    Invalid(String),
}

impl ValidationResult {
    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the value failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the failure message (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(message) => Self::Invalid(message),
        }
    }
}

/// A single failed field in a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Aggregate decision over the submit fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Every submit field passed.
    Accepted,
    /// At least one submit field failed; errors are in form order.
    Rejected(Vec<FieldError>),
}

impl SubmissionResult {
    /// Check if the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Get all field errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(errors) => errors,
        }
    }

    /// Ids of the invalid fields, in form order.
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.errors().iter().map(|e| e.field).collect()
    }

    /// The field that receives focus after a rejection.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.errors().first().map(|e| e.field)
    }
}
