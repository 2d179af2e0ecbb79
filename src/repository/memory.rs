//! In-memory store shared by request handlers.

use std::sync::{Arc, RwLock};

use crate::domain::broadcast::{Broadcast, MessageTemplate};
use crate::domain::chat::Chat;
use crate::domain::client::ClientRecord;
use crate::domain::settings::{
    Activatable, CallState, CatalogEntry, KnowledgeDocument, Location, Priority,
};
use crate::domain::types::{ClientId, EntryId};
use crate::domain::user::{User, UserDraft};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    BroadcastReader, BroadcastWriter, CatalogReader, CatalogToggle, CatalogWriter, ChatReader,
    ClientReader, ClientWriter, TemplateReader, UserWriter, seed,
};
use crate::roster::overlay::RecordEdits;

/// Everything the dashboard works with.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub clients: Arc<[ClientRecord]>,
    pub priorities: Vec<Priority>,
    pub call_states: Vec<CallState>,
    pub locations: Vec<Location>,
    pub documents: Vec<KnowledgeDocument>,
    pub users: Vec<User>,
    pub templates: Vec<MessageTemplate>,
    pub chats: Vec<Chat>,
    pub broadcasts: Vec<Broadcast>,
}

impl Dataset {
    /// Demo data the dashboard boots with.
    pub fn demo() -> Self {
        Self {
            clients: seed::clients().into(),
            priorities: seed::priorities(),
            call_states: seed::call_states(),
            locations: seed::locations(),
            documents: seed::documents(),
            users: seed::users(),
            templates: seed::templates(),
            chats: seed::chats(),
            broadcasts: Vec::new(),
        }
    }
}

/// Maps a catalog entry type to its collection inside the [`Dataset`].
pub trait Stored: CatalogEntry {
    fn slot(data: &Dataset) -> &Vec<Self>;
    fn slot_mut(data: &mut Dataset) -> &mut Vec<Self>;
}

macro_rules! stored_in {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn slot(data: &Dataset) -> &Vec<Self> {
                &data.$field
            }

            fn slot_mut(data: &mut Dataset) -> &mut Vec<Self> {
                &mut data.$field
            }
        }
    };
}

stored_in!(Priority, priorities);
stored_in!(CallState, call_states);
stored_in!(Location, locations);
stored_in!(KnowledgeDocument, documents);
stored_in!(User, users);

/// Cheaply clonable handle over a shared [`Dataset`].
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    data: Arc<RwLock<Dataset>>,
}

impl InMemoryRepository {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    pub fn demo() -> Self {
        Self::new(Dataset::demo())
    }

    /// Store holding only the given roster.
    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        Self::new(Dataset {
            clients: clients.into(),
            ..Dataset::default()
        })
    }
}

impl ClientReader for InMemoryRepository {
    fn roster(&self) -> RepositoryResult<Arc<[ClientRecord]>> {
        Ok(Arc::clone(&self.data.read()?.clients))
    }

    fn get_client(&self, id: &ClientId) -> RepositoryResult<Option<ClientRecord>> {
        let data = self.data.read()?;
        Ok(data.clients.iter().find(|c| &c.id == id).cloned())
    }
}

impl ClientWriter for InMemoryRepository {
    fn apply_client_edits(&self, edits: &[RecordEdits]) -> RepositoryResult<usize> {
        let mut data = self.data.write()?;
        let mut changed = 0;

        let next: Vec<ClientRecord> = data
            .clients
            .iter()
            .map(|record| match edits.iter().find(|edit| edit.id == record.id) {
                Some(edit) => {
                    changed += 1;
                    edit.values
                        .iter()
                        .cloned()
                        .fold(record.clone(), ClientRecord::with_value)
                }
                None => record.clone(),
            })
            .collect();

        data.clients = next.into();
        log::info!("Committed edits to {changed} client(s)");
        Ok(changed)
    }
}

impl<T: Stored> CatalogReader<T> for InMemoryRepository {
    fn list_entries(&self) -> RepositoryResult<Vec<T>> {
        let data = self.data.read()?;
        Ok(T::slot(&data).clone())
    }

    fn get_entry(&self, id: &EntryId) -> RepositoryResult<Option<T>> {
        let data = self.data.read()?;
        Ok(T::slot(&data).iter().find(|e| e.id() == id).cloned())
    }
}

impl<T: Stored> CatalogWriter<T> for InMemoryRepository {
    fn create_entry(&self, draft: T::Draft) -> RepositoryResult<T> {
        let entry = T::from_draft(EntryId::generate(), draft);
        T::slot_mut(&mut *self.data.write()?).push(entry.clone());
        Ok(entry)
    }

    fn update_entry(&self, id: &EntryId, draft: T::Draft) -> RepositoryResult<T> {
        let mut data = self.data.write()?;
        let entry = T::slot_mut(&mut data)
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        entry.apply(draft);
        Ok(entry.clone())
    }

    fn delete_entry(&self, id: &EntryId) -> RepositoryResult<()> {
        let mut data = self.data.write()?;
        let entries = T::slot_mut(&mut data);
        let before = entries.len();
        entries.retain(|e| e.id() != id);
        if entries.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl<T: Stored + Activatable> CatalogToggle<T> for InMemoryRepository {
    fn toggle_entry(&self, id: &EntryId) -> RepositoryResult<T> {
        let mut data = self.data.write()?;
        let entry = T::slot_mut(&mut data)
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        entry.toggle_active();
        Ok(entry.clone())
    }
}

impl UserWriter for InMemoryRepository {
    fn create_user(&self, draft: UserDraft) -> RepositoryResult<User> {
        let mut data = self.data.write()?;
        if data.users.iter().any(|user| user.email == draft.email) {
            return Err(RepositoryError::DuplicateEmail(draft.email.to_string()));
        }
        let user = User::from_draft(EntryId::generate(), draft);
        data.users.push(user.clone());
        Ok(user)
    }
}

impl TemplateReader for InMemoryRepository {
    fn list_templates(&self) -> RepositoryResult<Vec<MessageTemplate>> {
        Ok(self.data.read()?.templates.clone())
    }

    fn get_template(&self, id: &EntryId) -> RepositoryResult<Option<MessageTemplate>> {
        let data = self.data.read()?;
        Ok(data.templates.iter().find(|t| &t.id == id).cloned())
    }
}

impl ChatReader for InMemoryRepository {
    fn list_chats(&self) -> RepositoryResult<Vec<Chat>> {
        Ok(self.data.read()?.chats.clone())
    }

    fn get_chat(&self, id: &EntryId) -> RepositoryResult<Option<Chat>> {
        let data = self.data.read()?;
        Ok(data.chats.iter().find(|c| &c.id == id).cloned())
    }
}

impl BroadcastWriter for InMemoryRepository {
    fn record_broadcast(&self, broadcast: &Broadcast) -> RepositoryResult<()> {
        self.data.write()?.broadcasts.push(broadcast.clone());
        Ok(())
    }
}

impl BroadcastReader for InMemoryRepository {
    fn list_broadcasts(&self) -> RepositoryResult<Vec<Broadcast>> {
        Ok(self.data.read()?.broadcasts.clone())
    }
}
