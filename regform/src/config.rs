//! Form configuration types.

use std::time::Duration;

use crate::error::SetupError;
use crate::field::FieldId;
use crate::validation::PasswordPolicy;

/// Durations of the one-shot effects and the post-success reset delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timings {
    /// Shake played on an invalid field or on the submit button.
    pub attention: Duration,
    /// Pulse played on the reset button.
    pub button_pulse: Duration,
    /// Pulse played on the title at the first focus of a session.
    pub title_pulse: Duration,
    /// Pulse played on the success banner when it appears.
    pub banner_pulse: Duration,
    /// Fade-in of the form container on load.
    pub fade_in: Duration,
    /// Delay between an accepted submission and the automatic form reset.
    pub success_reset: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            attention: Duration::from_millis(500),
            button_pulse: Duration::from_millis(300),
            title_pulse: Duration::from_millis(500),
            banner_pulse: Duration::from_millis(500),
            fade_in: Duration::from_millis(800),
            success_reset: Duration::from_secs(3),
        }
    }
}

/// Label shown on the submit button while the success banner is up.
pub const DEFAULT_SUCCESS_LABEL: &str = "✅ Registered!";

/// Per-form configuration.
///
/// Field lists are matched against `fields`; order is always taken from
/// `fields`, never from the sub-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Fields present in the form, in form order.
    pub fields: Vec<FieldId>,

    /// Fields validated when they lose focus.
    pub blur_fields: Vec<FieldId>,

    /// Fields whose error is cleared while typing once the value passes.
    pub live_fields: Vec<FieldId>,

    /// Fields aggregated into the submit decision.
    pub submit_fields: Vec<FieldId>,

    /// Password rule set.
    pub password: PasswordPolicy,

    /// Effect and reset timings.
    pub timings: Timings,

    /// Submit button label after an accepted submission.
    pub success_label: String,

    /// If true, no effects are played (state changes still apply).
    pub reduce_motion: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            fields: FieldId::ALL.to_vec(),
            blur_fields: FieldId::ALL.to_vec(),
            live_fields: vec![FieldId::Name, FieldId::Email],
            submit_fields: vec![FieldId::Name, FieldId::Email, FieldId::Password],
            password: PasswordPolicy::default(),
            timings: Timings::default(),
            success_label: DEFAULT_SUCCESS_LABEL.to_string(),
            reduce_motion: false,
        }
    }
}

impl FormConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the form to the given fields.
    ///
    /// The blur, live and submit lists are narrowed to match.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldId>) -> Self {
        self.fields = fields.into_iter().collect();
        let fields = self.fields.clone();
        for list in [
            &mut self.blur_fields,
            &mut self.live_fields,
            &mut self.submit_fields,
        ] {
            list.retain(|f| fields.contains(f));
        }
        self
    }

    /// Aggregate every form field on submit, age and sex included.
    pub fn include_optional_on_submit(mut self) -> Self {
        self.submit_fields = self.fields.clone();
        self
    }

    /// Set the fields aggregated on submit.
    pub fn submit_fields(mut self, fields: impl IntoIterator<Item = FieldId>) -> Self {
        self.submit_fields = fields.into_iter().collect();
        self
    }

    /// Set the password policy.
    pub fn password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password = policy;
        self
    }

    /// Set the timings.
    pub fn timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the post-success submit label.
    pub fn success_label(mut self, label: impl Into<String>) -> Self {
        self.success_label = label.into();
        self
    }

    /// Enable or disable reduced motion.
    pub fn reduce_motion(mut self, enabled: bool) -> Self {
        self.reduce_motion = enabled;
        self
    }

    /// Whether `field` is part of the form.
    pub fn has_field(&self, field: FieldId) -> bool {
        self.fields.contains(&field)
    }

    /// Submit fields in form order.
    pub fn submit_order(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields
            .iter()
            .copied()
            .filter(|f| self.submit_fields.contains(f))
    }

    /// Check that every sub-list only names form fields.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.fields.is_empty() {
            return Err(SetupError::EmptyForm);
        }
        let lists: [(&'static str, &[FieldId]); 3] = [
            ("blur_fields", &self.blur_fields),
            ("live_fields", &self.live_fields),
            ("submit_fields", &self.submit_fields),
        ];
        for (list, fields) in lists {
            if let Some(&field) = fields.iter().find(|f| !self.has_field(**f)) {
                return Err(SetupError::FieldNotInForm { field, list });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_submit_excludes_age_and_sex() {
        let config = FormConfig::default();
        let order: Vec<_> = config.submit_order().collect();
        assert_eq!(
            order,
            vec![FieldId::Name, FieldId::Email, FieldId::Password]
        );
    }

    #[test]
    fn test_include_optional_on_submit() {
        let config = FormConfig::default().include_optional_on_submit();
        assert_eq!(config.submit_order().count(), 5);
    }

    #[test]
    fn test_submit_order_follows_form_order() {
        let config = FormConfig::default().submit_fields([FieldId::Sex, FieldId::Name]);
        let order: Vec<_> = config.submit_order().collect();
        assert_eq!(order, vec![FieldId::Name, FieldId::Sex]);
    }

    #[test]
    fn test_with_fields_narrows_lists() {
        let config = FormConfig::default().with_fields([FieldId::Email, FieldId::Age]);
        assert_eq!(config.submit_fields, vec![FieldId::Email]);
        assert_eq!(config.live_fields, vec![FieldId::Email]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_foreign_submit_field() {
        let mut config = FormConfig::default().with_fields([FieldId::Name]);
        config.submit_fields.push(FieldId::Age);
        assert!(matches!(
            config.validate(),
            Err(SetupError::FieldNotInForm {
                field: FieldId::Age,
                list: "submit_fields"
            })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_form() {
        let config = FormConfig::default().with_fields([]);
        assert!(matches!(config.validate(), Err(SetupError::EmptyForm)));
    }
}
