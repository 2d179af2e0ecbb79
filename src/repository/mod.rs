//! Record store seams and their in-memory implementation.
//!
//! The roster is served as an immutable snapshot; writers replace the
//! snapshot wholesale so readers holding an older one are never affected.

use std::sync::Arc;

use crate::domain::broadcast::{Broadcast, MessageTemplate};
use crate::domain::chat::Chat;
use crate::domain::client::ClientRecord;
use crate::domain::settings::{Activatable, CatalogEntry};
use crate::domain::types::{ClientId, EntryId};
use crate::domain::user::{User, UserDraft};
use crate::repository::errors::RepositoryResult;
use crate::roster::overlay::RecordEdits;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod seed;

pub use memory::InMemoryRepository;

pub trait ClientReader {
    /// Current roster snapshot in display order.
    fn roster(&self) -> RepositoryResult<Arc<[ClientRecord]>>;
    fn get_client(&self, id: &ClientId) -> RepositoryResult<Option<ClientRecord>>;
}

pub trait ClientWriter {
    /// Folds committed edits into a new snapshot. Returns the number of
    /// records changed; edits for unknown ids are skipped.
    fn apply_client_edits(&self, edits: &[RecordEdits]) -> RepositoryResult<usize>;
}

pub trait CatalogReader<T: CatalogEntry> {
    fn list_entries(&self) -> RepositoryResult<Vec<T>>;
    fn get_entry(&self, id: &EntryId) -> RepositoryResult<Option<T>>;
}

pub trait CatalogWriter<T: CatalogEntry> {
    fn create_entry(&self, draft: T::Draft) -> RepositoryResult<T>;
    fn update_entry(&self, id: &EntryId, draft: T::Draft) -> RepositoryResult<T>;
    fn delete_entry(&self, id: &EntryId) -> RepositoryResult<()>;
}

pub trait CatalogToggle<T: CatalogEntry + Activatable> {
    fn toggle_entry(&self, id: &EntryId) -> RepositoryResult<T>;
}

pub trait UserWriter {
    /// Adds an active user. Fails with `DuplicateEmail` when the address is
    /// already taken; the check and the insert happen under one lock.
    fn create_user(&self, draft: UserDraft) -> RepositoryResult<User>;
}

pub trait TemplateReader {
    fn list_templates(&self) -> RepositoryResult<Vec<MessageTemplate>>;
    fn get_template(&self, id: &EntryId) -> RepositoryResult<Option<MessageTemplate>>;
}

pub trait ChatReader {
    fn list_chats(&self) -> RepositoryResult<Vec<Chat>>;
    fn get_chat(&self, id: &EntryId) -> RepositoryResult<Option<Chat>>;
}

pub trait BroadcastWriter {
    fn record_broadcast(&self, broadcast: &Broadcast) -> RepositoryResult<()>;
}

pub trait BroadcastReader {
    fn list_broadcasts(&self) -> RepositoryResult<Vec<Broadcast>>;
}
