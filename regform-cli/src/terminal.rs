//! Terminal rendition of the registration form.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

use crossterm::style::{Stylize, style};
use log::{trace, warn};
use regform::field::FieldId;
use regform::presentation::{Control, Effect, EffectTarget, FieldState, Presentation};

pub const SUBMIT_LABEL: &str = "🚀 Register 🚀";
const SUCCESS_MESSAGE: &str = "✔ Registration successful!";

/// Presentation handle: a field's input or its error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Input(FieldId),
    Error(FieldId),
}

impl Slot {
    fn field(self) -> FieldId {
        match self {
            Slot::Input(f) | Slot::Error(f) => f,
        }
    }
}

/// Writes every visible change as a line of styled text.
pub struct TerminalPresentation<W: Write> {
    out: W,
    values: HashMap<FieldId, String>,
    states: HashMap<FieldId, FieldState>,
    messages: HashMap<FieldId, String>,
    lifted: HashSet<FieldId>,
    effects: HashMap<String, Effect>,
    success_visible: bool,
    submit_label: String,
}

impl<W: Write> TerminalPresentation<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            values: HashMap::new(),
            states: HashMap::new(),
            messages: HashMap::new(),
            lifted: HashSet::new(),
            effects: HashMap::new(),
            success_visible: false,
            submit_label: SUBMIT_LABEL.to_string(),
        }
    }

    /// Replace a field's raw value.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Print a message that is not part of the form.
    pub fn notice(&mut self, text: impl Display) {
        self.line(style(text).yellow());
    }

    /// Print the whole form.
    pub fn snapshot(&mut self, fields: impl IntoIterator<Item = FieldId>) {
        let rows: Vec<String> = fields
            .into_iter()
            .map(|field| self.render_row(field))
            .collect();
        for row in rows {
            self.line(row);
        }
        let banner = if self.success_visible {
            format!("  {}", style(SUCCESS_MESSAGE).green().bold())
        } else {
            String::new()
        };
        let label = self.submit_label.clone();
        self.line(format!("  [{label}]{banner}"));
    }

    fn render_row(&self, field: FieldId) -> String {
        let value = self.values.get(&field).map(String::as_str).unwrap_or("");
        let shown = if field == FieldId::Password {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let marker = if self.lifted.contains(&field) { ">" } else { " " };
        let status = match self.states.get(&field).copied().unwrap_or_default() {
            FieldState::Neutral => style("·".to_string()).dim(),
            FieldState::Valid => style("✓".to_string()).green(),
            FieldState::Invalid => {
                let message = self.messages.get(&field).cloned().unwrap_or_default();
                style(format!("✗ {message}")).red()
            }
        };
        let effect = self
            .effects
            .get(field.key())
            .map(|e| format!(" ({e:?})").to_lowercase())
            .unwrap_or_default();
        format!("{marker} {:<9} [{shown}] {status}{effect}", field.label())
    }

    fn line(&mut self, content: impl Display) {
        if let Err(e) = writeln!(self.out, "{content}") {
            warn!("Terminal write failed: {e}");
        }
    }
}

fn target_name(target: &EffectTarget<'_, Slot>) -> String {
    match target {
        EffectTarget::Input(slot) => slot.field().key().to_string(),
        EffectTarget::Control(control) => format!("{control:?}").to_lowercase(),
    }
}

impl<W: Write> Presentation for TerminalPresentation<W> {
    type Handle = Slot;

    fn field_value(&self, input: &Slot) -> String {
        self.values.get(&input.field()).cloned().unwrap_or_default()
    }

    fn set_field_state(&mut self, input: &Slot, state: FieldState) {
        let field = input.field();
        let previous = self.states.insert(field, state).unwrap_or_default();
        if previous == state {
            return;
        }
        match state {
            FieldState::Valid => self.line(style(format!("  {field}: ok")).green()),
            FieldState::Neutral => self.line(style(format!("  {field}: cleared")).dim()),
            // The message line follows.
            FieldState::Invalid => {}
        }
    }

    fn set_error_message(&mut self, slot: &Slot, message: Option<&str>) {
        let field = slot.field();
        match message {
            Some(message) => {
                self.messages.insert(field, message.to_string());
                self.line(style(format!("  {field}: {message}")).red());
            }
            None => {
                self.messages.remove(&field);
            }
        }
    }

    fn set_lifted(&mut self, input: &Slot, lifted: bool) {
        let field = input.field();
        if lifted {
            self.lifted.insert(field);
        } else {
            self.lifted.remove(&field);
        }
    }

    fn play_effect(&mut self, target: EffectTarget<'_, Slot>, effect: Effect, duration: Duration) {
        let name = target_name(&target);
        trace!("{:?} on {} for {:?}", effect, name, duration);
        if effect == Effect::Shake {
            self.line(style(format!("  ~ {name} shakes")).dim());
        }
        self.effects.insert(name, effect);
    }

    fn clear_effect(&mut self, target: EffectTarget<'_, Slot>) {
        self.effects.remove(&target_name(&target));
    }

    fn set_highlight(&mut self, control: Control, on: bool) {
        trace!("{:?} highlight {}", control, on);
    }

    fn focus(&mut self, input: &Slot) {
        let field = input.field();
        self.lifted.insert(field);
        self.line(style(format!("  focus -> {field}")).cyan());
    }

    fn show_success(&mut self) {
        self.success_visible = true;
        self.line(style(format!("  {SUCCESS_MESSAGE}")).green().bold());
    }

    fn hide_success(&mut self) {
        if std::mem::take(&mut self.success_visible) {
            self.line(style("  success message hidden").dim());
        }
    }

    fn set_submit_label(&mut self, text: &str) {
        self.submit_label = text.to_string();
        self.line(format!("  [{text}]"));
    }

    fn restore_submit_label(&mut self) {
        if self.submit_label != SUBMIT_LABEL {
            self.submit_label = SUBMIT_LABEL.to_string();
            self.line(format!("  [{SUBMIT_LABEL}]"));
        }
    }

    fn reset_values(&mut self) {
        self.values.clear();
        self.line(style("  form cleared").dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(p: TerminalPresentation<Vec<u8>>) -> String {
        String::from_utf8(p.out).unwrap()
    }

    #[test]
    fn test_password_is_masked_in_snapshot() {
        let mut p = TerminalPresentation::new(Vec::new());
        p.set_value(FieldId::Password, "secreto99");
        p.snapshot([FieldId::Password]);
        let text = output(p);
        assert!(text.contains("*********"));
        assert!(!text.contains("secreto99"));
    }

    #[test]
    fn test_field_value_reads_back() {
        let mut p = TerminalPresentation::new(Vec::new());
        p.set_value(FieldId::Email, "ana@correo.com");
        assert_eq!(p.field_value(&Slot::Input(FieldId::Email)), "ana@correo.com");
        assert_eq!(p.field_value(&Slot::Input(FieldId::Name)), "");
    }

    #[test]
    fn test_error_message_is_printed() {
        let mut p = TerminalPresentation::new(Vec::new());
        p.set_field_state(&Slot::Input(FieldId::Age), FieldState::Invalid);
        p.set_error_message(&Slot::Error(FieldId::Age), Some("Age is required"));
        assert!(output(p).contains("Age is required"));
    }

    #[test]
    fn test_restore_label_is_quiet_when_unchanged() {
        let mut p = TerminalPresentation::new(Vec::new());
        p.restore_submit_label();
        p.hide_success();
        assert!(output(p).is_empty());
    }
}
