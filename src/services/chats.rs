use crate::domain::chat::Chat;
use crate::domain::types::EntryId;
use crate::dto::chats::{ChatSummary, ChatsQuery};
use crate::repository::ChatReader;
use crate::services::{ServiceError, ServiceResult};

/// Chats whose client name contains the search text.
pub fn list_chats<R>(repo: &R, query: &ChatsQuery) -> ServiceResult<Vec<ChatSummary>>
where
    R: ChatReader + ?Sized,
{
    let search = query.search.as_deref().map(str::trim).unwrap_or_default();
    let chats = repo.list_chats().map_err(|err| {
        log::error!("Failed to list chats: {err}");
        ServiceError::from(err)
    })?;

    Ok(chats
        .iter()
        .filter(|chat| chat.matches(search))
        .map(ChatSummary::from)
        .collect())
}

pub fn get_chat<R>(repo: &R, id: &str) -> ServiceResult<Chat>
where
    R: ChatReader + ?Sized,
{
    repo.get_chat(&EntryId::new(id)?)?
        .ok_or(ServiceError::NotFound)
}
