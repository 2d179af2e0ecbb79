//! Error conversion glue between layers.
//!
//! The domain and roster modules stay free of service error types; the
//! conversions into [`ServiceError`] live here instead.

use crate::domain::broadcast::WizardError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;
use crate::session::SessionError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<SessionError> for ServiceError {
    fn from(val: SessionError) -> Self {
        match val {
            SessionError::NotFound => ServiceError::NotFound,
            SessionError::InvalidId(_) => ServiceError::TypeConstraint(val.to_string()),
            SessionError::Poisoned => ServiceError::Internal(val.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<WizardError> for ServiceError {
    fn from(val: WizardError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<csv::Error> for ServiceError {
    fn from(val: csv::Error) -> Self {
        ServiceError::Internal(format!("csv export failed: {val}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entities_map_to_not_found() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(SessionError::NotFound),
            ServiceError::NotFound
        ));
    }

    #[test]
    fn wizard_errors_are_shown_to_the_operator() {
        let err = ServiceError::from(WizardError::MissingTemplate);
        assert!(matches!(err, ServiceError::Form(message) if message.contains("template")));
    }
}
