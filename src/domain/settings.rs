//! Settings catalogs managed from the configuration panel.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CallStateName, DocumentName, DocumentPath, EntryId, HexColor, LocationName, PriorityName,
    SanitizedText,
};

/// Common shape of an entry editable through the settings CRUD panels.
pub trait CatalogEntry: Clone + Send + Sync + 'static {
    /// Validated payload used to create or update the entry.
    type Draft;

    /// Human readable label used in logs and messages.
    const KIND: &'static str;

    fn id(&self) -> &EntryId;

    fn name(&self) -> &str;

    fn from_draft(id: EntryId, draft: Self::Draft) -> Self;

    /// Overwrites the editable fields, keeping the id and creation data.
    fn apply(&mut self, draft: Self::Draft);
}

/// Entries that can be switched between active and inactive.
pub trait Activatable {
    fn is_active(&self) -> bool;

    fn toggle_active(&mut self);
}

/// Priority tag assigned to clients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Priority {
    pub id: EntryId,
    pub name: PriorityName,
    pub color: HexColor,
    pub description: SanitizedText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriorityDraft {
    pub name: PriorityName,
    pub color: HexColor,
    pub description: SanitizedText,
}

impl CatalogEntry for Priority {
    type Draft = PriorityDraft;
    const KIND: &'static str = "priority";

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: EntryId, draft: PriorityDraft) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            description: draft.description,
        }
    }

    fn apply(&mut self, draft: PriorityDraft) {
        self.name = draft.name;
        self.color = draft.color;
        self.description = draft.description;
    }
}

/// Configurable call outcome label.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallState {
    pub id: EntryId,
    pub name: CallStateName,
    pub color: HexColor,
    pub description: SanitizedText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallStateDraft {
    pub name: CallStateName,
    pub color: HexColor,
    pub description: SanitizedText,
}

impl CatalogEntry for CallState {
    type Draft = CallStateDraft;
    const KIND: &'static str = "call state";

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: EntryId, draft: CallStateDraft) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            description: draft.description,
        }
    }

    fn apply(&mut self, draft: CallStateDraft) {
        self.name = draft.name;
        self.color = draft.color;
        self.description = draft.description;
    }
}

/// Site or branch where clients are served.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: EntryId,
    pub name: LocationName,
    pub address: String,
    pub phone: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationDraft {
    pub name: LocationName,
    pub address: String,
    pub phone: String,
    pub active: bool,
}

impl CatalogEntry for Location {
    type Draft = LocationDraft;
    const KIND: &'static str = "location";

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: EntryId, draft: LocationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            phone: draft.phone,
            active: draft.active,
        }
    }

    fn apply(&mut self, draft: LocationDraft) {
        self.name = draft.name;
        self.address = draft.address;
        self.phone = draft.phone;
        self.active = draft.active;
    }
}

impl Activatable for Location {
    fn is_active(&self) -> bool {
        self.active
    }

    fn toggle_active(&mut self) {
        self.active = !self.active;
    }
}

/// PDF document feeding the assistant's knowledge base.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeDocument {
    pub id: EntryId,
    pub name: DocumentName,
    pub description: SanitizedText,
    pub pdf_path: DocumentPath,
    pub active: bool,
    pub created_on: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeDocumentDraft {
    pub name: DocumentName,
    pub description: SanitizedText,
    pub pdf_path: DocumentPath,
    pub active: bool,
}

impl CatalogEntry for KnowledgeDocument {
    type Draft = KnowledgeDocumentDraft;
    const KIND: &'static str = "knowledge document";

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_draft(id: EntryId, draft: KnowledgeDocumentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            pdf_path: draft.pdf_path,
            active: draft.active,
            created_on: Local::now().date_naive(),
        }
    }

    fn apply(&mut self, draft: KnowledgeDocumentDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.pdf_path = draft.pdf_path;
        self.active = draft.active;
    }
}

impl Activatable for KnowledgeDocument {
    fn is_active(&self) -> bool {
        self.active
    }

    fn toggle_active(&mut self) {
        self.active = !self.active;
    }
}
