//! Form events delivered to the session.

use crate::field::FieldId;
use crate::presentation::Control;

/// A single browser/user event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Page finished loading.
    Load,
    /// Field gained focus.
    Focus(FieldId),
    /// Field lost focus.
    Blur(FieldId),
    /// Field value changed.
    Input(FieldId),
    /// Form submitted.
    Submit,
    /// Reset button pressed.
    Reset,
    /// Pointer moved over a control.
    PointerEnter(Control),
    /// Pointer left a control.
    PointerLeave(Control),
}

impl FormEvent {
    /// Whether the host must cancel the event's default action.
    pub fn prevents_default(&self) -> bool {
        matches!(self, FormEvent::Submit | FormEvent::Reset)
    }

    /// Whether the event counts as the user interacting with the form again.
    ///
    /// Losing focus is not: a blur right after submitting must not cancel
    /// the pending reset.
    pub fn is_interaction(&self) -> bool {
        matches!(
            self,
            FormEvent::Focus(_) | FormEvent::Input(_) | FormEvent::Submit | FormEvent::Reset
        )
    }

    /// The field this event targets (if any).
    pub fn field(&self) -> Option<FieldId> {
        match self {
            FormEvent::Focus(f) | FormEvent::Blur(f) | FormEvent::Input(f) => Some(*f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_submit_and_reset_prevent_default() {
        assert!(FormEvent::Submit.prevents_default());
        assert!(FormEvent::Reset.prevents_default());
        assert!(!FormEvent::Blur(FieldId::Name).prevents_default());
        assert!(!FormEvent::Load.prevents_default());
    }

    #[test]
    fn test_hover_and_blur_are_not_interaction() {
        assert!(!FormEvent::PointerEnter(Control::Submit).is_interaction());
        assert!(!FormEvent::Blur(FieldId::Password).is_interaction());
        assert!(!FormEvent::Load.is_interaction());
        assert!(FormEvent::Input(FieldId::Email).is_interaction());
    }
}
