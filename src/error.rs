//! Error types for building and resolving the resource model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A field that is not declared on the resource kind
    #[error("resource kind '{kind}' has no field '{field}'")]
    UnknownField { kind: String, field: String },

    /// A reference was taken to something that has no name yet
    #[error("cannot reference {target}: it has no name")]
    UnnamedReference { target: String },

    /// Parameter constructed with options outside the recognized set
    #[error("parameter options {} are invalid", .options.join(", "))]
    UnknownParameterOption { options: Vec<String> },

    /// Auto-naming ran out of candidate names
    #[error("no free name for '{base}' after {attempts} attempts")]
    NamingExhausted { base: String, attempts: usize },
}

impl ModelError {
    pub fn unknown_field(kind: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            kind: kind.into(),
            field: field.into(),
        }
    }

    pub fn unnamed(target: impl Into<String>) -> Self {
        Self::UnnamedReference {
            target: target.into(),
        }
    }

    /// The offending name or field, if the error carries one
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::UnknownField { field, .. } => Some(field),
            Self::UnnamedReference { target } => Some(target),
            Self::NamingExhausted { base, .. } => Some(base),
            Self::UnknownParameterOption { .. } => None,
        }
    }
}
