use serde::Serialize;

use crate::domain::broadcast::BroadcastDraft;
use crate::domain::types::ClientId;
use crate::roster::overlay::RecordEdits;
use crate::session::{RosterSession, SessionId};

/// Pending state of one operator session.
#[derive(Debug, Serialize)]
pub struct SessionData {
    pub id: SessionId,
    /// Selected ids, sorted.
    pub selected: Vec<ClientId>,
    pub edits: Vec<RecordEdits>,
    pub broadcast: BroadcastDraft,
}

impl SessionData {
    pub fn new(id: SessionId, session: &RosterSession) -> Self {
        Self {
            id,
            selected: session.selection.sorted_ids(),
            edits: session.overlay.edits(),
            broadcast: session.broadcast.clone(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CommitSummary {
    /// Records changed in the store.
    pub committed: usize,
}
