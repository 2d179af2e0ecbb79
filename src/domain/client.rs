use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AgentName, ClientId, ClientName, LocationName, PriorityName, TypeConstraintError,
};

/// Whether a commercial agent has reached the client by phone.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Contacted,
    NotContacted,
}

/// Outcome of the last conversation about the offer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InterestStatus {
    Interested,
    NotInterested,
    NoAnswer,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Registered,
    #[default]
    Unregistered,
}

/// Wire names of a status enum, matching its serde representation.
macro_rules! status_codec {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(format!(
                        "unknown {} `{other}`",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

status_codec!(CallStatus {
    Contacted => "contacted",
    NotContacted => "not_contacted",
});

status_codec!(InterestStatus {
    Interested => "interested",
    NotInterested => "not_interested",
    NoAnswer => "no_answer",
});

status_codec!(RegistrationStatus {
    Registered => "registered",
    Unregistered => "unregistered",
});

/// One prospective or existing customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: ClientName,
    pub phone: String,
    #[serde(default)]
    pub location: LocationName,
    pub assigned_agent: AgentName,
    #[serde(default)]
    pub priority_tag: Option<PriorityName>,
    pub call_status: CallStatus,
    #[serde(default)]
    pub interest_status: Option<InterestStatus>,
    #[serde(default)]
    pub follow_up: bool,
    #[serde(default)]
    pub registration: RegistrationStatus,
    #[serde(default)]
    pub call_count: u32,
    #[serde(default)]
    pub last_call_on: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
    pub registered_on: NaiveDate,
    pub last_interaction_at: NaiveDateTime,
}

/// Fields of a [`ClientRecord`] that may be edited from the roster.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    CallStatus,
    InterestStatus,
    AssignedAgent,
    PriorityTag,
}

impl EditableField {
    pub const ALL: [EditableField; 4] = [
        EditableField::CallStatus,
        EditableField::InterestStatus,
        EditableField::AssignedAgent,
        EditableField::PriorityTag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EditableField::CallStatus => "call_status",
            EditableField::InterestStatus => "interest_status",
            EditableField::AssignedAgent => "assigned_agent",
            EditableField::PriorityTag => "priority_tag",
        }
    }
}

impl Display for EditableField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditableField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditableField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown field `{s}`")))
    }
}

/// Typed value of one editable field.
///
/// The variant names the field, so a value can never be stored under the
/// wrong field. `None` payloads clear an optional field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    CallStatus(CallStatus),
    InterestStatus(Option<InterestStatus>),
    AssignedAgent(AgentName),
    PriorityTag(Option<PriorityName>),
}

impl FieldValue {
    pub fn field(&self) -> EditableField {
        match self {
            FieldValue::CallStatus(_) => EditableField::CallStatus,
            FieldValue::InterestStatus(_) => EditableField::InterestStatus,
            FieldValue::AssignedAgent(_) => EditableField::AssignedAgent,
            FieldValue::PriorityTag(_) => EditableField::PriorityTag,
        }
    }
}

impl ClientRecord {
    /// Reads the current base value of an editable field.
    pub fn field_value(&self, field: EditableField) -> FieldValue {
        match field {
            EditableField::CallStatus => FieldValue::CallStatus(self.call_status),
            EditableField::InterestStatus => FieldValue::InterestStatus(self.interest_status),
            EditableField::AssignedAgent => FieldValue::AssignedAgent(self.assigned_agent.clone()),
            EditableField::PriorityTag => FieldValue::PriorityTag(self.priority_tag.clone()),
        }
    }

    /// Returns a copy of the record with one field replaced.
    #[must_use]
    pub fn with_value(mut self, value: FieldValue) -> Self {
        match value {
            FieldValue::CallStatus(status) => self.call_status = status,
            FieldValue::InterestStatus(status) => self.interest_status = status,
            FieldValue::AssignedAgent(agent) => self.assigned_agent = agent,
            FieldValue::PriorityTag(tag) => self.priority_tag = tag,
        }
        self
    }

    pub fn is_registered(&self) -> bool {
        self.registration == RegistrationStatus::Registered
    }
}
