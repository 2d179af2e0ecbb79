//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod broadcast;
pub mod roster;
pub mod settings;
pub mod users;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("{}", first_message(.0))]
    Validation(#[from] ValidationErrors),

    #[error("El nombre es requerido")]
    MissingName,

    #[error("Correo electrónico inválido")]
    InvalidEmail,

    #[error("Color inválido, use el formato #rrggbb")]
    InvalidColor,

    #[error("Debe seleccionar un archivo PDF")]
    InvalidDocument,

    #[error("Valor inválido: {0}")]
    InvalidValue(String),
}

/// Message of the first failing field, in field name order.
fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, errs) in fields {
        if let Some(e) = errs.first() {
            return match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", e.code),
            };
        }
    }
    "Formulario inválido".to_string()
}

impl From<TypeConstraintError> for FormError {
    fn from(val: TypeConstraintError) -> Self {
        match val {
            TypeConstraintError::EmptyString => FormError::MissingName,
            TypeConstraintError::InvalidEmail => FormError::InvalidEmail,
            TypeConstraintError::InvalidColor(_) => FormError::InvalidColor,
            TypeConstraintError::InvalidDocument => FormError::InvalidDocument,
            other => FormError::InvalidValue(other.to_string()),
        }
    }
}
