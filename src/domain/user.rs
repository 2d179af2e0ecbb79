use serde::{Deserialize, Serialize};

use crate::domain::settings::{Activatable, CatalogEntry};
use crate::domain::types::{EntryId, UserEmail, UserName};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Administrator,
    #[default]
    Commercial,
}

/// Dashboard operator account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: EntryId,
    pub name: UserName,
    pub email: UserEmail,
    pub role: UserRole,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub name: UserName,
    pub email: UserEmail,
    pub role: UserRole,
}

impl User {
    /// Case-insensitive substring match on name or email.
    pub fn matches(&self, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.as_str().contains(&needle)
    }
}

impl CatalogEntry for User {
    type Draft = UserDraft;
    const KIND: &'static str = "user";

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// New accounts start active.
    fn from_draft(id: EntryId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            active: true,
        }
    }

    fn apply(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.role = draft.role;
    }
}

impl Activatable for User {
    fn is_active(&self) -> bool {
        self.active
    }

    fn toggle_active(&mut self) {
        self.active = !self.active;
    }
}
