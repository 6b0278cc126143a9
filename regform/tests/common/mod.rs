//! In-memory presentation used by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use regform::prelude::*;
use regform::registry::RegistryBuilder;

pub const SUBMIT_LABEL: &str = "🚀 Register 🚀";

/// Records what a browser DOM would look like after each call.
#[derive(Debug)]
pub struct Dom {
    pub values: HashMap<&'static str, String>,
    pub states: HashMap<&'static str, FieldState>,
    pub messages: HashMap<&'static str, String>,
    pub lifted: HashSet<&'static str>,
    pub effects: HashMap<String, Effect>,
    pub highlighted: HashSet<Control>,
    pub focused: Option<&'static str>,
    pub success_visible: bool,
    pub submit_label: String,
    pub effects_played: usize,
}

impl Default for Dom {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            states: HashMap::new(),
            messages: HashMap::new(),
            lifted: HashSet::new(),
            effects: HashMap::new(),
            highlighted: HashSet::new(),
            focused: None,
            success_visible: false,
            submit_label: SUBMIT_LABEL.to_string(),
            effects_played: 0,
        }
    }
}

fn target_name(target: EffectTarget<'_, &'static str>) -> String {
    match target {
        EffectTarget::Input(id) => id.to_string(),
        EffectTarget::Control(control) => format!("{control:?}"),
    }
}

impl Presentation for Dom {
    type Handle = &'static str;

    fn field_value(&self, input: &&'static str) -> String {
        self.values.get(input).cloned().unwrap_or_default()
    }

    fn set_field_state(&mut self, input: &&'static str, state: FieldState) {
        self.states.insert(*input, state);
    }

    fn set_error_message(&mut self, slot: &&'static str, message: Option<&str>) {
        match message {
            Some(message) => {
                self.messages.insert(*slot, message.to_string());
            }
            None => {
                self.messages.remove(slot);
            }
        }
    }

    fn set_lifted(&mut self, input: &&'static str, lifted: bool) {
        if lifted {
            self.lifted.insert(*input);
        } else {
            self.lifted.remove(input);
        }
    }

    fn play_effect(
        &mut self,
        target: EffectTarget<'_, &'static str>,
        effect: Effect,
        _duration: Duration,
    ) {
        self.effects.insert(target_name(target), effect);
        self.effects_played += 1;
    }

    fn clear_effect(&mut self, target: EffectTarget<'_, &'static str>) {
        self.effects.remove(&target_name(target));
    }

    fn set_highlight(&mut self, control: Control, on: bool) {
        if on {
            self.highlighted.insert(control);
        } else {
            self.highlighted.remove(&control);
        }
    }

    fn focus(&mut self, input: &&'static str) {
        self.focused = Some(*input);
    }

    fn show_success(&mut self) {
        self.success_visible = true;
    }

    fn hide_success(&mut self) {
        self.success_visible = false;
    }

    fn set_submit_label(&mut self, text: &str) {
        self.submit_label = text.to_string();
    }

    fn restore_submit_label(&mut self) {
        self.submit_label = SUBMIT_LABEL.to_string();
    }

    fn reset_values(&mut self) {
        self.values.clear();
    }
}

/// Element id of a field's input, as in the registration markup.
pub fn input_id(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "nombre",
        FieldId::Email => "correo",
        FieldId::Password => "contrasena",
        FieldId::Age => "edad",
        FieldId::Sex => "sexo",
    }
}

/// Element id of a field's error slot.
pub fn error_id(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "errorNombre",
        FieldId::Email => "errorCorreo",
        FieldId::Password => "errorContrasena",
        FieldId::Age => "errorEdad",
        FieldId::Sex => "errorSexo",
    }
}

pub fn bindings(fields: &[FieldId]) -> RegistryBuilder<&'static str> {
    fields.iter().fold(FieldRegistry::builder(), |b, f| {
        b.bind(*f, input_id(*f), error_id(*f))
    })
}

pub fn session_with(config: FormConfig) -> FormSession<Dom> {
    let fields = config.fields.clone();
    FormSession::new(config, Dom::default(), bindings(&fields)).expect("valid setup")
}

pub fn session() -> FormSession<Dom> {
    session_with(FormConfig::default())
}

/// Replace a field's value without firing any event.
pub fn set_value(session: &mut FormSession<Dom>, field: FieldId, value: &str) {
    session
        .presentation_mut()
        .values
        .insert(input_id(field), value.to_string());
}

/// Replace a field's value and fire the input event.
pub fn type_into(session: &mut FormSession<Dom>, field: FieldId, value: &str, now: Instant) {
    set_value(session, field, value);
    session.dispatch(FormEvent::Input(field), now);
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub const VALID_PASSWORD: &str = "secreto99";
