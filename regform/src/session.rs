//! Presentation controller.
//!
//! A [`FormSession`] owns everything one rendered form needs between events:
//! per-field state, pending delayed tasks and the first-interaction flag.
//! Events are serviced one at a time, to completion, on the caller's thread.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::FormConfig;
use crate::error::SetupError;
use crate::event::FormEvent;
use crate::field::FieldId;
use crate::presentation::{Control, Effect, EffectKey, EffectTarget, FieldState, Presentation};
use crate::registry::{FieldRegistry, RegistryBuilder};
use crate::scheduler::{Scheduler, TaskKey};
use crate::validation::{FieldError, SubmissionResult, ValidationResult, Validators};

/// What servicing an event amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The event was applied.
    Handled,
    /// The event targets nothing in this form.
    Ignored,
    /// The form was submitted.
    Submitted(SubmissionResult),
}

/// Validation and error-presentation state for one form.
///
/// # Example
///
/// ```ignore
/// let bindings = FieldRegistry::builder()
///     .bind(FieldId::Name, name_input, name_error)
///     // ...
///     ;
/// let mut session = FormSession::new(FormConfig::default(), dom, bindings)?;
///
/// session.dispatch(FormEvent::Load, Instant::now());
/// // on every browser event:
/// session.dispatch(FormEvent::Blur(FieldId::Email), Instant::now());
/// // whenever `session.next_deadline()` passes:
/// session.run_due(Instant::now());
/// ```
pub struct FormSession<P: Presentation> {
    config: FormConfig,
    validators: Validators,
    registry: FieldRegistry<P::Handle>,
    presentation: P,
    states: [FieldState; FieldId::COUNT],
    scheduler: Scheduler,
    first_interaction: bool,
}

impl<P: Presentation> FormSession<P> {
    /// Assemble a session.
    ///
    /// Fails if the config is inconsistent or any form field lacks a binding.
    pub fn new(
        config: FormConfig,
        presentation: P,
        bindings: RegistryBuilder<P::Handle>,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let validators = Validators::new(&config)?;
        let registry = bindings.build(&config)?;
        debug!("Form session ready with fields {:?}", config.fields);

        Ok(Self {
            config,
            validators,
            registry,
            presentation,
            states: [FieldState::Neutral; FieldId::COUNT],
            scheduler: Scheduler::new(),
            first_interaction: true,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    pub fn registry(&self) -> &FieldRegistry<P::Handle> {
        &self.registry
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// Presentation state of `field`.
    pub fn state(&self, field: FieldId) -> FieldState {
        self.states[field.index()]
    }

    /// States of every form field, in form order.
    pub fn states(&self) -> impl Iterator<Item = (FieldId, FieldState)> + '_ {
        self.registry.fields().map(|f| (f, self.state(f)))
    }

    /// True until the first field focus of the session.
    pub fn first_interaction_pending(&self) -> bool {
        self.first_interaction
    }

    /// Deadline of the next scheduled task.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Check if an automatic post-success reset is scheduled.
    pub fn success_reset_pending(&self) -> bool {
        self.scheduler.is_pending(TaskKey::SuccessReset)
    }

    /// Validate the current content of `field`.
    ///
    /// Fields other than the password are trimmed first. Returns `Valid` for
    /// fields outside the form.
    pub fn check(&self, field: FieldId) -> ValidationResult {
        let Some(binding) = self.registry.get(field) else {
            return ValidationResult::Valid;
        };
        let raw = self.presentation.field_value(&binding.input);
        let value = if field.trims_input() { raw.trim() } else { raw.as_str() };
        self.validators.validate(field, value)
    }

    /// Service one event.
    pub fn dispatch(&mut self, event: FormEvent, now: Instant) -> Dispatch {
        if let Some(field) = event.field()
            && !self.config.has_field(field)
        {
            warn!("Ignoring {:?}: field not in form", event);
            return Dispatch::Ignored;
        }

        debug!("Dispatching {:?}", event);
        if event.is_interaction() {
            self.supersede_success();
        }

        match event {
            FormEvent::Load => {
                let fade_in = self.config.timings.fade_in;
                self.play_effect(EffectKey::Control(Control::Container), Effect::FadeIn, fade_in, now);
            }
            FormEvent::Focus(field) => self.on_focus(field, now),
            FormEvent::Blur(field) => self.on_blur(field, now),
            FormEvent::Input(field) => self.on_input(field),
            FormEvent::Submit => return Dispatch::Submitted(self.submit(now)),
            FormEvent::Reset => {
                let pulse = self.config.timings.button_pulse;
                self.play_effect(EffectKey::Control(Control::Reset), Effect::Pulse, pulse, now);
                self.reset_form();
            }
            FormEvent::PointerEnter(control) | FormEvent::PointerLeave(control) => {
                if !matches!(control, Control::Submit | Control::Reset) {
                    return Dispatch::Ignored;
                }
                let on = matches!(event, FormEvent::PointerEnter(_));
                self.presentation.set_highlight(control, on);
            }
        }
        Dispatch::Handled
    }

    /// Fire every task due at `now`. Returns how many ran.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        for key in &due {
            match *key {
                TaskKey::ClearEffect(target) => self.clear_effect(target),
                TaskKey::SuccessReset => {
                    debug!("Success reset firing");
                    self.reset_form();
                }
            }
        }
        due.len()
    }

    fn on_focus(&mut self, field: FieldId, now: Instant) {
        if let Some(binding) = self.registry.get(field) {
            self.presentation.set_lifted(&binding.input, true);
        }
        if self.first_interaction {
            self.first_interaction = false;
            let pulse = self.config.timings.title_pulse;
            self.play_effect(EffectKey::Control(Control::Title), Effect::Pulse, pulse, now);
        }
    }

    fn on_blur(&mut self, field: FieldId, now: Instant) {
        if self.config.blur_fields.contains(&field) {
            let result = self.check(field);
            self.apply(field, result, now);
        }
        if self.state(field) != FieldState::Invalid
            && let Some(binding) = self.registry.get(field)
        {
            self.presentation.set_lifted(&binding.input, false);
        }
    }

    /// Live checks only ever clear an error; a failing value while typing
    /// leaves the field as it was.
    fn on_input(&mut self, field: FieldId) {
        if self.config.live_fields.contains(&field) && self.check(field).is_valid() {
            self.mark_valid(field);
        }
    }

    fn submit(&mut self, now: Instant) -> SubmissionResult {
        let order: Vec<FieldId> = self.config.submit_order().collect();
        let mut errors = Vec::new();
        for field in order {
            let result = self.check(field);
            if let ValidationResult::Invalid(message) = &result {
                errors.push(FieldError {
                    field,
                    message: message.clone(),
                });
            }
            self.apply(field, result, now);
        }

        if let Some(first) = errors.first() {
            debug!("Submission rejected: {:?}", errors);
            if let Some(binding) = self.registry.get(first.field) {
                self.presentation.focus(&binding.input);
            }
            let shake = self.config.timings.attention;
            self.play_effect(EffectKey::Control(Control::Submit), Effect::Shake, shake, now);
            return SubmissionResult::Rejected(errors);
        }

        self.presentation.show_success();
        let pulse = self.config.timings.banner_pulse;
        self.play_effect(EffectKey::Control(Control::SuccessBanner), Effect::Pulse, pulse, now);
        self.presentation.set_submit_label(&self.config.success_label);
        info!(
            "Registration accepted: name={:?} email={:?} password=***",
            self.trimmed_value(FieldId::Name),
            self.trimmed_value(FieldId::Email),
        );
        self.scheduler
            .schedule(TaskKey::SuccessReset, now + self.config.timings.success_reset);
        SubmissionResult::Accepted
    }

    /// Return every field to neutral and clear the form, immediately.
    fn reset_form(&mut self) {
        let cancelled = self
            .scheduler
            .cancel_where(|k| matches!(k, TaskKey::ClearEffect(EffectKey::Field(_))));
        for key in cancelled {
            if let TaskKey::ClearEffect(target) = key {
                self.clear_effect(target);
            }
        }
        self.scheduler.cancel(TaskKey::SuccessReset);

        self.presentation.reset_values();
        for (field, binding) in self.registry.iter() {
            self.presentation.set_field_state(&binding.input, FieldState::Neutral);
            self.presentation.set_error_message(&binding.error_slot, None);
            self.presentation.set_lifted(&binding.input, false);
            self.states[field.index()] = FieldState::Neutral;
        }
        self.presentation.restore_submit_label();
        self.presentation.hide_success();
        debug!("Form reset");
    }

    /// A new interaction while the success banner is up cancels the pending
    /// reset and takes the banner down; values and field states stay.
    fn supersede_success(&mut self) {
        if self.scheduler.cancel(TaskKey::SuccessReset) {
            debug!("Pending success reset superseded");
            self.presentation.hide_success();
            self.presentation.restore_submit_label();
        }
    }

    fn apply(&mut self, field: FieldId, result: ValidationResult, now: Instant) {
        match result {
            ValidationResult::Valid => self.mark_valid(field),
            ValidationResult::Invalid(message) => self.mark_invalid(field, &message, now),
        }
    }

    fn mark_valid(&mut self, field: FieldId) {
        let Some(binding) = self.registry.get(field) else {
            return;
        };
        self.presentation.set_field_state(&binding.input, FieldState::Valid);
        self.presentation.set_error_message(&binding.error_slot, None);
        self.transition(field, FieldState::Valid);
    }

    fn mark_invalid(&mut self, field: FieldId, message: &str, now: Instant) {
        let Some(binding) = self.registry.get(field) else {
            return;
        };
        self.presentation.set_field_state(&binding.input, FieldState::Invalid);
        self.presentation.set_error_message(&binding.error_slot, Some(message));
        self.transition(field, FieldState::Invalid);
        let shake = self.config.timings.attention;
        self.play_effect(EffectKey::Field(field), Effect::Shake, shake, now);
    }

    fn transition(&mut self, field: FieldId, to: FieldState) {
        let from = std::mem::replace(&mut self.states[field.index()], to);
        if from != to {
            debug!("{field}: {:?} -> {:?}", from, to);
        }
    }

    fn play_effect(&mut self, key: EffectKey, effect: Effect, duration: Duration, now: Instant) {
        if self.config.reduce_motion {
            return;
        }
        let Some(target) = resolve(&self.registry, key) else {
            return;
        };
        self.presentation.play_effect(target, effect, duration);
        self.scheduler.schedule(TaskKey::ClearEffect(key), now + duration);
    }

    fn clear_effect(&mut self, key: EffectKey) {
        if let Some(target) = resolve(&self.registry, key) {
            self.presentation.clear_effect(target);
        }
    }

    fn trimmed_value(&self, field: FieldId) -> Option<String> {
        self.registry
            .get(field)
            .map(|b| self.presentation.field_value(&b.input).trim().to_string())
    }
}

fn resolve<H>(registry: &FieldRegistry<H>, key: EffectKey) -> Option<EffectTarget<'_, H>> {
    match key {
        EffectKey::Field(field) => registry.get(field).map(|b| EffectTarget::Input(&b.input)),
        EffectKey::Control(control) => Some(EffectTarget::Control(control)),
    }
}
