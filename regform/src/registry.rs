//! Field to presentation-handle registry.

use crate::config::FormConfig;
use crate::error::SetupError;
use crate::field::FieldId;

/// Handles for one field: the input itself and its error-message slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding<H> {
    pub input: H,
    pub error_slot: H,
}

/// Bindings for every field of a form, in form order.
///
/// Built once through [`FieldRegistry::builder`]; a built registry is known to
/// cover exactly the configured fields.
#[derive(Debug, Clone)]
pub struct FieldRegistry<H> {
    bindings: Vec<(FieldId, FieldBinding<H>)>,
}

impl<H> FieldRegistry<H> {
    /// Start binding fields.
    pub fn builder() -> RegistryBuilder<H> {
        RegistryBuilder::default()
    }

    /// Get the binding for `field`.
    pub fn get(&self, field: FieldId) -> Option<&FieldBinding<H>> {
        self.bindings
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, binding)| binding)
    }

    /// Bound fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.bindings.iter().map(|(f, _)| *f)
    }

    /// All bindings, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldBinding<H>)> + '_ {
        self.bindings.iter().map(|(f, b)| (*f, b))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Collects bindings before validating them against a [`FormConfig`].
#[derive(Debug)]
pub struct RegistryBuilder<H> {
    bindings: Vec<(FieldId, FieldBinding<H>)>,
    duplicate: Option<FieldId>,
}

impl<H> Default for RegistryBuilder<H> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            duplicate: None,
        }
    }
}

impl<H> RegistryBuilder<H> {
    /// Bind `field` to its input and error slot.
    pub fn bind(mut self, field: FieldId, input: H, error_slot: H) -> Self {
        if self.bindings.iter().any(|(f, _)| *f == field) {
            self.duplicate.get_or_insert(field);
        } else {
            self.bindings.push((field, FieldBinding { input, error_slot }));
        }
        self
    }

    /// Check the bindings against `config` and freeze them.
    ///
    /// Every form field must be bound exactly once, and nothing else may be.
    pub fn build(mut self, config: &FormConfig) -> Result<FieldRegistry<H>, SetupError> {
        if let Some(field) = self.duplicate {
            return Err(SetupError::DuplicateBinding(field));
        }
        if let Some((field, _)) = self.bindings.iter().find(|(f, _)| !config.has_field(*f)) {
            return Err(SetupError::UnexpectedBinding(*field));
        }
        if let Some(&field) = config
            .fields
            .iter()
            .find(|f| !self.bindings.iter().any(|(bound, _)| bound == *f))
        {
            return Err(SetupError::MissingBinding(field));
        }

        self.bindings.sort_by_key(|(field, _)| {
            config.fields.iter().position(|f| f == field).unwrap_or(usize::MAX)
        });
        Ok(FieldRegistry {
            bindings: self.bindings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind_all(fields: &[FieldId]) -> RegistryBuilder<String> {
        fields.iter().fold(FieldRegistry::builder(), |b, f| {
            b.bind(*f, f.key().to_string(), format!("error-{f}"))
        })
    }

    #[test]
    fn test_build_complete_registry() {
        let registry = bind_all(&FieldId::ALL)
            .build(&FormConfig::default())
            .unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.get(FieldId::Email).map(|b| b.error_slot.as_str()),
            Some("error-email")
        );
    }

    #[test]
    fn test_missing_binding_fails_fast() {
        let err = bind_all(&[FieldId::Name, FieldId::Email])
            .build(&FormConfig::default())
            .unwrap_err();
        assert!(matches!(err, SetupError::MissingBinding(FieldId::Password)));
    }

    #[test]
    fn test_duplicate_binding() {
        let err = bind_all(&FieldId::ALL)
            .bind(FieldId::Age, "age2".into(), "error-age2".into())
            .build(&FormConfig::default())
            .unwrap_err();
        assert!(matches!(err, SetupError::DuplicateBinding(FieldId::Age)));
    }

    #[test]
    fn test_unexpected_binding() {
        let config = FormConfig::default().with_fields([FieldId::Name, FieldId::Email]);
        let err = bind_all(&[FieldId::Name, FieldId::Email, FieldId::Sex])
            .build(&config)
            .unwrap_err();
        assert!(matches!(err, SetupError::UnexpectedBinding(FieldId::Sex)));
    }

    #[test]
    fn test_bindings_follow_form_order() {
        let registry = bind_all(&[FieldId::Sex, FieldId::Name, FieldId::Age, FieldId::Email, FieldId::Password])
            .build(&FormConfig::default())
            .unwrap();
        let order: Vec<_> = registry.fields().collect();
        assert_eq!(order, FieldId::ALL.to_vec());
    }
}
