use serde::{Deserialize, Serialize};

use crate::domain::chat::{Chat, ChatStatus};
use crate::domain::client::CallStatus;
use crate::domain::types::EntryId;

#[derive(Debug, Default, Deserialize)]
pub struct ChatsQuery {
    pub search: Option<String>,
}

/// Row of the chat list; messages are only sent with a single chat.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChatSummary {
    pub id: EntryId,
    pub client_name: String,
    pub status: ChatStatus,
    pub contact_status: CallStatus,
    pub last_message_time: String,
    pub unread: u32,
    pub last_message: Option<String>,
}

impl From<&Chat> for ChatSummary {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id.clone(),
            client_name: chat.client_name.clone(),
            status: chat.status,
            contact_status: chat.contact_status,
            last_message_time: chat.last_message_time.clone(),
            unread: chat.unread,
            last_message: chat.messages.last().map(|m| m.content.clone()),
        }
    }
}
