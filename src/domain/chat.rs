use serde::{Deserialize, Serialize};

use crate::domain::client::CallStatus;
use crate::domain::types::EntryId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    Draft,
    Unknown,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    Client,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: EntryId,
    pub author: Author,
    pub content: String,
    /// Display timestamp as delivered by the messaging provider.
    pub sent_at: String,
}

/// Conversation between a client and the assistant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chat {
    pub id: EntryId,
    pub client_name: String,
    pub status: ChatStatus,
    pub contact_status: CallStatus,
    pub last_message_time: String,
    pub unread: u32,
    pub messages: Vec<ChatMessage>,
}

impl Chat {
    /// Case-insensitive substring match on the client name.
    pub fn matches(&self, search: &str) -> bool {
        self.client_name
            .to_lowercase()
            .contains(&search.to_lowercase())
    }
}
