//! Form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One labeled input of the registration form.
///
/// Variants are declared in form order; iteration over [`FieldId::ALL`] and
/// submit aggregation both follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Password,
    Age,
    Sex,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Age,
        FieldId::Sex,
    ];

    /// Number of fields.
    pub const COUNT: usize = FieldId::ALL.len();

    /// Stable lowercase key.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::Age => "age",
            FieldId::Sex => "sex",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::Age => "Age",
            FieldId::Sex => "Sex",
        }
    }

    /// Whether the controller trims surrounding whitespace before validating.
    ///
    /// Passwords are taken verbatim.
    pub fn trims_input(self) -> bool {
        !matches!(self, FieldId::Password)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when parsing a field key that names no field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    /// Accepts the field key, case-insensitively, plus the element ids used by
    /// the Spanish-language markup (`nombre`, `correo`, `contrasena`, `edad`,
    /// `sexo`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "nombre" => Ok(FieldId::Name),
            "email" | "correo" => Ok(FieldId::Email),
            "password" | "contrasena" => Ok(FieldId::Password),
            "age" | "edad" => Ok(FieldId::Age),
            "sex" | "sexo" => Ok(FieldId::Sex),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_parse_keys_and_markup_ids() {
        assert_eq!("email".parse::<FieldId>(), Ok(FieldId::Email));
        assert_eq!("Correo".parse::<FieldId>(), Ok(FieldId::Email));
        assert_eq!("contrasena".parse::<FieldId>(), Ok(FieldId::Password));
        assert_eq!(
            "phone".parse::<FieldId>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_only_password_keeps_whitespace() {
        let verbatim: Vec<_> = FieldId::ALL
            .into_iter()
            .filter(|f| !f.trims_input())
            .collect();
        assert_eq!(verbatim, vec![FieldId::Password]);
    }
}
