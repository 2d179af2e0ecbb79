//! Message templates and the two-step broadcast wizard.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::client::{CallStatus, ClientRecord};
use crate::domain::types::{ClientId, EntryId, TemplateName};

/// Pre-approved outbound message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageTemplate {
    pub id: EntryId,
    pub name: TemplateName,
    pub content: String,
    /// Template carries a call-to-action button.
    pub has_button: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("a template must be selected")]
    MissingTemplate,
    #[error("the send step has not been reached")]
    NotReadyToSend,
    #[error("the broadcast has no recipients")]
    NoRecipients,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectTemplate,
    ConfigureSend,
}

/// Recipient groups offered in the send step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    AllClients,
    FollowUp,
    Contacted,
    NotContacted,
    /// Ids picked in the roster's selection set.
    Selected,
}

impl Audience {
    /// Whether a record belongs to the group. `Selected` is resolved by the
    /// caller against the selection set and never matches here.
    pub fn includes(self, record: &ClientRecord) -> bool {
        match self {
            Audience::AllClients => true,
            Audience::FollowUp => record.follow_up,
            Audience::Contacted => record.call_status == CallStatus::Contacted,
            Audience::NotContacted => record.call_status == CallStatus::NotContacted,
            Audience::Selected => false,
        }
    }
}

/// Wizard progress kept in the operator's session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BroadcastDraft {
    pub step: WizardStep,
    pub template_id: Option<EntryId>,
}

impl BroadcastDraft {
    #[must_use]
    pub fn select_template(mut self, template_id: EntryId) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Moves from template selection to the send step.
    pub fn advance(self) -> Result<Self, WizardError> {
        if self.template_id.is_none() {
            return Err(WizardError::MissingTemplate);
        }
        Ok(Self {
            step: WizardStep::ConfigureSend,
            ..self
        })
    }

    /// Template to send once the send step is reached.
    pub fn ready_template(&self) -> Result<&EntryId, WizardError> {
        match (&self.step, &self.template_id) {
            (_, None) => Err(WizardError::MissingTemplate),
            (WizardStep::SelectTemplate, Some(_)) => Err(WizardError::NotReadyToSend),
            (WizardStep::ConfigureSend, Some(id)) => Ok(id),
        }
    }
}

/// A recorded, resolved broadcast.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Broadcast {
    pub id: EntryId,
    pub template_id: EntryId,
    pub template_name: TemplateName,
    pub audience: Audience,
    pub recipients: Vec<ClientId>,
    pub scheduled_for: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}
