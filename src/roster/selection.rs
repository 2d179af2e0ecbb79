//! Broadcast recipient selection, keyed by client id.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// Set of selected client ids.
///
/// Membership is independent of filtering and paging: ids stay selected
/// while hidden, and ids absent from the roster may be recorded too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<ClientId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the membership of `id` only.
    #[must_use]
    pub fn toggle(mut self, id: ClientId) -> Self {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        self
    }

    /// Replaces the selection with exactly the given ids.
    #[must_use]
    pub fn select_all<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = ClientId>,
    {
        self.ids.clear();
        self.ids.extend(ids);
        self
    }

    #[must_use]
    pub fn clear(mut self) -> Self {
        self.ids.clear();
        self
    }

    pub fn is_selected(&self, id: &ClientId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientId> {
        self.ids.iter()
    }

    /// Selected ids for stable output: numeric ids by value, then the rest
    /// in lexical order.
    pub fn sorted_ids(&self) -> Vec<ClientId> {
        let mut ids: Vec<ClientId> = self.ids.iter().cloned().collect();
        ids.sort_by_cached_key(|id| {
            let numeric = id.as_str().parse::<u64>().ok();
            (numeric.is_none(), numeric, id.as_str().to_string())
        });
        ids
    }
}
