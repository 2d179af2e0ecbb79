//! Forms posted from the client roster table.

use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{CallStatus, EditableField, FieldValue, InterestStatus};
use crate::domain::types::{AgentName, ClientId, PriorityName};
use crate::forms::FormError;

/// Toggles one row's checkbox.
#[derive(Deserialize, Validate)]
pub struct ToggleSelectionForm {
    #[validate(length(min = 1))]
    pub id: String,
}

impl TryFrom<ToggleSelectionForm> for ClientId {
    type Error = FormError;

    fn try_from(form: ToggleSelectionForm) -> Result<Self, Self::Error> {
        form.validate()?;
        ClientId::new(form.id).map_err(|e| FormError::InvalidValue(e.to_string()))
    }
}

/// Inline edit of one cell. An empty `value` clears optional fields.
#[derive(Deserialize, Validate)]
pub struct EditFieldForm {
    pub field: EditableField,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub value: Option<String>,
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<EditFieldForm> for FieldValue {
    type Error = FormError;

    fn try_from(form: EditFieldForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let value = optional(form.value);

        let parsed = match form.field {
            EditableField::CallStatus => {
                let raw = value.ok_or_else(|| {
                    FormError::InvalidValue("el estado de llamada es requerido".to_string())
                })?;
                FieldValue::CallStatus(raw.parse::<CallStatus>()?)
            }
            EditableField::InterestStatus => FieldValue::InterestStatus(
                value.map(|raw| raw.parse::<InterestStatus>()).transpose()?,
            ),
            EditableField::AssignedAgent => {
                let raw = value.ok_or_else(|| {
                    FormError::InvalidValue("el comercial es requerido".to_string())
                })?;
                FieldValue::AssignedAgent(AgentName::new(raw)?)
            }
            EditableField::PriorityTag => {
                FieldValue::PriorityTag(value.map(PriorityName::new).transpose()?)
            }
        };

        Ok(parsed)
    }
}
