//! Presentation layer interface.
//!
//! The session never renders anything itself. It resolves fields to handles
//! through the [`FieldRegistry`](crate::registry::FieldRegistry) and calls into
//! a [`Presentation`] implementation, which owns the actual inputs, error
//! slots, buttons and banner.

use std::time::Duration;

use crate::field::FieldId;

/// Presentation state of one field.
///
/// Derived from the most recent validation result for the field; never stored
/// independently of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Not checked since load or the last reset.
    #[default]
    Neutral,
    /// Last check passed.
    Valid,
    /// Last check failed; an error message is shown.
    Invalid,
}

/// Non-field elements the session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Submit,
    Reset,
    Title,
    SuccessBanner,
    Container,
}

/// One-shot visual effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Shake,
    Pulse,
    FadeIn,
}

/// Element an effect plays on, resolved to a presentation handle.
#[derive(Debug)]
pub enum EffectTarget<'a, H> {
    Input(&'a H),
    Control(Control),
}

/// Handle-free identity of an effect target, used to key scheduled clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKey {
    Field(FieldId),
    Control(Control),
}

/// Operations the session performs on the rendered form.
pub trait Presentation {
    /// Reference to an input element or an error slot.
    type Handle;

    /// Current raw content of an input.
    fn field_value(&self, input: &Self::Handle) -> String;

    /// Reflect a field's state (error/success styling).
    fn set_field_state(&mut self, input: &Self::Handle, state: FieldState);

    /// Show `message` in an error slot, or hide the slot with `None`.
    fn set_error_message(&mut self, slot: &Self::Handle, message: Option<&str>);

    /// Raise or lower an input (focus lift).
    fn set_lifted(&mut self, input: &Self::Handle, lifted: bool);

    /// Start a one-shot effect. The session schedules the matching
    /// [`clear_effect`](Self::clear_effect) after `duration`.
    fn play_effect(&mut self, target: EffectTarget<'_, Self::Handle>, effect: Effect, duration: Duration);

    /// Remove whatever effect is playing on `target`. Must be idempotent.
    fn clear_effect(&mut self, target: EffectTarget<'_, Self::Handle>);

    /// Hover highlight on a button.
    fn set_highlight(&mut self, control: Control, on: bool);

    /// Move input focus.
    fn focus(&mut self, input: &Self::Handle);

    fn show_success(&mut self);

    fn hide_success(&mut self);

    /// Temporarily relabel the submit button.
    fn set_submit_label(&mut self, text: &str);

    /// Put the submit button's original label back.
    fn restore_submit_label(&mut self);

    /// Clear every input's value.
    fn reset_values(&mut self);
}
