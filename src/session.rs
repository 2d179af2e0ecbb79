//! Per-operator roster state that outlives a single request.
//!
//! The selection set, the pending edit overlay and the broadcast wizard
//! progress belong to one operator's session. Filter criteria and the page
//! number travel with every request instead.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::broadcast::BroadcastDraft;
use crate::roster::{EditOverlay, SelectionSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
    #[error("session store lock poisoned")]
    Poisoned,
    #[error("invalid session id: {0}")]
    InvalidId(String),
}

impl<T> From<PoisonError<T>> for SessionError {
    fn from(_: PoisonError<T>) -> Self {
        SessionError::Poisoned
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| SessionError::InvalidId(s.to_string()))
    }
}

/// Everything an operator has picked or edited but not yet committed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RosterSession {
    pub selection: SelectionSet,
    pub overlay: EditOverlay,
    pub broadcast: BroadcastDraft,
}

/// Shared map of open sessions.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, RosterSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an empty session.
    pub fn open(&self) -> Result<SessionId, SessionError> {
        let id = SessionId::generate();
        self.sessions
            .lock()?
            .insert(id, RosterSession::default());
        log::debug!("Opened session {id}");
        Ok(id)
    }

    /// Snapshot of a session's state.
    pub fn get(&self, id: &SessionId) -> Result<RosterSession, SessionError> {
        self.sessions
            .lock()?
            .get(id)
            .cloned()
            .ok_or(SessionError::NotFound)
    }

    /// Replaces a session's state with the result of `f`.
    pub fn update<F>(&self, id: &SessionId, f: F) -> Result<RosterSession, SessionError>
    where
        F: FnOnce(RosterSession) -> RosterSession,
    {
        self.try_update(id, |session| Ok::<_, SessionError>(f(session)))
    }

    /// Like [`SessionStore::update`] for transitions that may fail. On error
    /// the stored state is left as it was.
    pub fn try_update<F, E>(&self, id: &SessionId, f: F) -> Result<RosterSession, E>
    where
        F: FnOnce(RosterSession) -> Result<RosterSession, E>,
        E: From<SessionError>,
    {
        let mut sessions = self.sessions.lock().map_err(SessionError::from)?;
        let slot = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        let next = f(slot.clone())?;
        *slot = next.clone();
        Ok(next)
    }

    /// Drops a session and everything pending in it.
    pub fn close(&self, id: &SessionId) -> Result<(), SessionError> {
        match self.sessions.lock()?.remove(id) {
            Some(_) => {
                log::debug!("Closed session {id}");
                Ok(())
            }
            None => Err(SessionError::NotFound),
        }
    }

    pub fn len(&self) -> Result<usize, SessionError> {
        Ok(self.sessions.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ClientId;

    fn id(raw: &str) -> ClientId {
        ClientId::new(raw).unwrap()
    }

    #[test]
    fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.open().unwrap();
        let b = store.open().unwrap();

        store
            .update(&a, |mut s| {
                s.selection = s.selection.toggle(id("1"));
                s
            })
            .unwrap();

        assert!(store.get(&a).unwrap().selection.is_selected(&id("1")));
        assert!(store.get(&b).unwrap().selection.is_empty());
    }

    #[test]
    fn failed_transition_keeps_state() {
        let store = SessionStore::new();
        let a = store.open().unwrap();

        let result: Result<RosterSession, SessionError> = store.try_update(&a, |mut s| {
            s.selection = s.selection.toggle(id("1"));
            Err(SessionError::InvalidId("boom".into()))
        });

        assert!(result.is_err());
        assert!(store.get(&a).unwrap().selection.is_empty());
    }

    #[test]
    fn closed_session_is_gone() {
        let store = SessionStore::new();
        let a = store.open().unwrap();
        store.close(&a).unwrap();

        assert_eq!(store.get(&a), Err(SessionError::NotFound));
        assert_eq!(store.close(&a), Err(SessionError::NotFound));
        assert_eq!(store.len().unwrap(), 0);
    }

    #[test]
    fn session_ids_parse_from_strings() {
        let id = SessionId::generate();
        assert_eq!(id.to_string().parse::<SessionId>(), Ok(id));
        assert!("nope".parse::<SessionId>().is_err());
    }
}
