//! JSON overrides for the form configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use regform::config::FormConfig;
use regform::field::FieldId;
use regform::validation::PasswordPolicy;
use serde::Deserialize;

use crate::error::CliError;

/// Settings file contents. Every key is optional.
///
/// ```json
/// {
///   "submit_fields": ["name", "email", "password", "age"],
///   "password": { "min_length": 10 },
///   "timings_ms": { "success_reset": 5000 }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub fields: Option<Vec<FieldId>>,
    pub blur_fields: Option<Vec<FieldId>>,
    pub live_fields: Option<Vec<FieldId>>,
    pub submit_fields: Option<Vec<FieldId>>,
    pub password: Option<PasswordPolicy>,
    pub timings_ms: TimingOverrides,
    pub success_label: Option<String>,
    pub reduce_motion: Option<bool>,
}

/// Timing overrides in milliseconds.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingOverrides {
    pub attention: Option<u64>,
    pub button_pulse: Option<u64>,
    pub title_pulse: Option<u64>,
    pub banner_pulse: Option<u64>,
    pub fade_in: Option<u64>,
    pub success_reset: Option<u64>,
}

impl Settings {
    /// Read settings from `path`.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply these overrides on top of `config`.
    pub fn apply(self, mut config: FormConfig) -> FormConfig {
        if let Some(fields) = self.fields {
            config = config.with_fields(fields);
        }
        if let Some(fields) = self.blur_fields {
            config.blur_fields = fields;
        }
        if let Some(fields) = self.live_fields {
            config.live_fields = fields;
        }
        if let Some(fields) = self.submit_fields {
            config.submit_fields = fields;
        }
        if let Some(policy) = self.password {
            config.password = policy;
        }
        if let Some(label) = self.success_label {
            config.success_label = label;
        }
        if let Some(reduce) = self.reduce_motion {
            config.reduce_motion = reduce;
        }

        let t = &mut config.timings;
        let overrides = [
            (self.timings_ms.attention, &mut t.attention),
            (self.timings_ms.button_pulse, &mut t.button_pulse),
            (self.timings_ms.title_pulse, &mut t.title_pulse),
            (self.timings_ms.banner_pulse, &mut t.banner_pulse),
            (self.timings_ms.fade_in, &mut t.fade_in),
            (self.timings_ms.success_reset, &mut t.success_reset),
        ];
        for (ms, slot) in overrides {
            if let Some(ms) = ms {
                *slot = Duration::from_millis(ms);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_keep_defaults() {
        let config = Settings::parse("{}").unwrap().apply(FormConfig::default());
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let settings = Settings::parse(
            r#"{
                "submit_fields": ["name", "email", "password", "age"],
                "password": { "min_length": 10 },
                "timings_ms": { "success_reset": 5000 },
                "success_label": "Done"
            }"#,
        )
        .unwrap();
        let config = settings.apply(FormConfig::default());

        assert_eq!(config.submit_fields.len(), 4);
        assert_eq!(config.password.min_length, 10);
        assert!(config.password.require_digit);
        assert_eq!(config.timings.success_reset, Duration::from_secs(5));
        assert_eq!(config.timings.attention, Duration::from_millis(500));
        assert_eq!(config.success_label, "Done");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Settings::parse(r#"{ "colour": "red" }"#).is_err());
    }

    #[test]
    fn test_unknown_field_names_are_rejected() {
        assert!(Settings::parse(r#"{ "fields": ["phone"] }"#).is_err());
    }
}
