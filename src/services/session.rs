//! Selection and inline edit workflows scoped to an operator session.

use crate::domain::client::FieldValue;
use crate::domain::types::ClientId;
use crate::dto::roster::ClientsQuery;
use crate::dto::session::{CommitSummary, SessionData};
use crate::forms::roster::{EditFieldForm, ToggleSelectionForm};
use crate::repository::{ClientReader, ClientWriter};
use crate::roster::{self, EditOverlay};
use crate::services::{ServiceError, ServiceResult};
use crate::session::{RosterSession, SessionId, SessionStore};

pub fn open_session(sessions: &SessionStore) -> ServiceResult<SessionData> {
    let id = sessions.open()?;
    Ok(SessionData::new(id, &RosterSession::default()))
}

pub fn get_session(sessions: &SessionStore, id: &SessionId) -> ServiceResult<SessionData> {
    let session = sessions.get(id)?;
    Ok(SessionData::new(*id, &session))
}

/// Drops the session together with any uncommitted edits.
pub fn close_session(sessions: &SessionStore, id: &SessionId) -> ServiceResult<()> {
    sessions.close(id)?;
    Ok(())
}

pub fn toggle_selection(
    sessions: &SessionStore,
    id: &SessionId,
    form: ToggleSelectionForm,
) -> ServiceResult<SessionData> {
    let client_id = ClientId::try_from(form)?;
    let session = sessions.update(id, |mut session| {
        session.selection = session.selection.toggle(client_id);
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

/// Selects exactly the records passing the query's filters, on every page.
pub fn select_all<R>(
    repo: &R,
    sessions: &SessionStore,
    id: &SessionId,
    query: &ClientsQuery,
) -> ServiceResult<SessionData>
where
    R: ClientReader + ?Sized,
{
    let records = repo.roster().map_err(|err| {
        log::error!("Failed to load the roster: {err}");
        ServiceError::from(err)
    })?;
    let ids = roster::filtered_ids(&records, &query.criteria());

    let session = sessions.update(id, |mut session| {
        session.selection = session.selection.select_all(ids);
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

pub fn clear_selection(sessions: &SessionStore, id: &SessionId) -> ServiceResult<SessionData> {
    let session = sessions.update(id, |mut session| {
        session.selection = session.selection.clear();
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

/// Records an inline edit in the overlay. The store is left untouched.
pub fn edit_field<R>(
    repo: &R,
    sessions: &SessionStore,
    id: &SessionId,
    client_id: &ClientId,
    form: EditFieldForm,
) -> ServiceResult<SessionData>
where
    R: ClientReader + ?Sized,
{
    let value = FieldValue::try_from(form)?;

    if repo.get_client(client_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let session = sessions.update(id, |mut session| {
        session.overlay = session.overlay.set_field(client_id.clone(), value);
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

/// Discards pending edits of one record, or of all records.
pub fn reset_edits(
    sessions: &SessionStore,
    id: &SessionId,
    client_id: Option<&ClientId>,
) -> ServiceResult<SessionData> {
    let session = sessions.update(id, |mut session| {
        session.overlay = match client_id {
            Some(client_id) => session.overlay.reset_record(client_id),
            None => session.overlay.reset(),
        };
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

/// Folds the overlay into the store and empties it. When the store rejects
/// the edits they stay pending.
pub fn commit_edits<R>(
    repo: &R,
    sessions: &SessionStore,
    id: &SessionId,
) -> ServiceResult<CommitSummary>
where
    R: ClientWriter + ?Sized,
{
    let mut committed = 0;
    sessions.try_update(id, |mut session| {
        let edits = session.overlay.edits();
        if !edits.is_empty() {
            committed = repo.apply_client_edits(&edits).map_err(|err| {
                log::error!("Failed to commit client edits: {err}");
                ServiceError::from(err)
            })?;
        }
        session.overlay = EditOverlay::new();
        Ok::<_, ServiceError>(session)
    })?;

    Ok(CommitSummary { committed })
}
