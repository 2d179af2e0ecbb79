//! Mock repository implementations for isolating services in tests.

use std::sync::Arc;

use mockall::mock;

use crate::domain::broadcast::{Broadcast, MessageTemplate};
use crate::domain::chat::Chat;
use crate::domain::client::ClientRecord;
use crate::domain::types::{ClientId, EntryId};
use crate::domain::user::{User, UserDraft};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BroadcastReader, BroadcastWriter, ChatReader, ClientReader, ClientWriter, TemplateReader,
    UserWriter,
};
use crate::roster::overlay::RecordEdits;

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn roster(&self) -> RepositoryResult<Arc<[ClientRecord]>>;
        fn get_client(&self, id: &ClientId) -> RepositoryResult<Option<ClientRecord>>;
    }

    impl ClientWriter for Repository {
        fn apply_client_edits(&self, edits: &[RecordEdits]) -> RepositoryResult<usize>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, draft: UserDraft) -> RepositoryResult<User>;
    }

    impl TemplateReader for Repository {
        fn list_templates(&self) -> RepositoryResult<Vec<MessageTemplate>>;
        fn get_template(&self, id: &EntryId) -> RepositoryResult<Option<MessageTemplate>>;
    }

    impl ChatReader for Repository {
        fn list_chats(&self) -> RepositoryResult<Vec<Chat>>;
        fn get_chat(&self, id: &EntryId) -> RepositoryResult<Option<Chat>>;
    }

    impl BroadcastWriter for Repository {
        fn record_broadcast(&self, broadcast: &Broadcast) -> RepositoryResult<()>;
    }

    impl BroadcastReader for Repository {
        fn list_broadcasts(&self) -> RepositoryResult<Vec<Broadcast>>;
    }
}
