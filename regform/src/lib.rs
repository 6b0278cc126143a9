pub mod config;
pub mod event;
pub mod field;
pub mod presentation;
pub mod registry;
pub mod scheduler;
pub mod session;
pub mod validation;

mod error;

pub use error::SetupError;
pub use session::{Dispatch, FormSession};

pub mod prelude {
    pub use crate::SetupError;
    pub use crate::config::{FormConfig, Timings};
    pub use crate::event::FormEvent;
    pub use crate::field::FieldId;
    pub use crate::presentation::{
        Control, Effect, EffectKey, EffectTarget, FieldState, Presentation,
    };
    pub use crate::registry::{FieldBinding, FieldRegistry};
    pub use crate::session::{Dispatch, FormSession};
    pub use crate::validation::{
        FieldError, PasswordPolicy, SubmissionResult, ValidationResult, Validators,
    };
}
