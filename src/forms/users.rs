use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{UserEmail, UserName};
use crate::domain::user::{User, UserDraft, UserRole};
use crate::forms::FormError;
use crate::forms::settings::CatalogForm;

#[derive(Deserialize, Validate)]
/// Form data for adding a dashboard user.
pub struct AddUserForm {
    #[validate(length(min = 1, max = 128, message = "El nombre es requerido"))]
    pub name: String,
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl CatalogForm for AddUserForm {
    type Entry = User;

    fn into_draft(self) -> Result<UserDraft, FormError> {
        Ok(UserDraft {
            name: UserName::new(self.name)?,
            email: UserEmail::new(self.email)?,
            role: self.role,
        })
    }
}
