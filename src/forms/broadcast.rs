use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::broadcast::Audience;
use crate::domain::types::EntryId;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
pub struct SelectTemplateForm {
    #[validate(length(min = 1, message = "Debe seleccionar una plantilla"))]
    pub template_id: String,
}

impl TryFrom<SelectTemplateForm> for EntryId {
    type Error = FormError;

    fn try_from(form: SelectTemplateForm) -> Result<Self, Self::Error> {
        form.validate()?;
        EntryId::new(form.template_id).map_err(|e| FormError::InvalidValue(e.to_string()))
    }
}

#[derive(Deserialize, Validate)]
pub struct SendBroadcastForm {
    #[serde(default)]
    pub audience: Audience,
    /// `YYYY-MM-DDTHH:MM` as produced by a datetime-local input.
    #[serde(default)]
    pub scheduled_for: Option<String>,
}

/// Validated send step.
#[derive(Debug, PartialEq, Eq)]
pub struct SendBroadcastPayload {
    pub audience: Audience,
    pub scheduled_for: Option<NaiveDateTime>,
}

impl TryFrom<SendBroadcastForm> for SendBroadcastPayload {
    type Error = FormError;

    fn try_from(form: SendBroadcastForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let scheduled_for = form
            .scheduled_for
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M")
                    .map_err(|_| FormError::InvalidValue(format!("fecha inválida: {raw}")))
            })
            .transpose()?;

        Ok(Self {
            audience: form.audience,
            scheduled_for,
        })
    }
}
