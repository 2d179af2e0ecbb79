//! Pending inline edits layered over the committed roster.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::client::{ClientRecord, EditableField, FieldValue};
use crate::domain::types::ClientId;

/// Uncommitted field overrides keyed by client id.
///
/// The base records are never touched; readers go through
/// [`EditOverlay::effective_value`] or [`EditOverlay::effective_record`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOverlay {
    edits: HashMap<ClientId, HashMap<EditableField, FieldValue>>,
}

/// All pending values for one record, in field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordEdits {
    pub id: ClientId,
    pub values: Vec<FieldValue>,
}

impl EditOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one field of one record, keeping every other override.
    #[must_use]
    pub fn set_field(mut self, id: ClientId, value: FieldValue) -> Self {
        self.edits.entry(id).or_default().insert(value.field(), value);
        self
    }

    /// The override for `field` when present, else the record's own value.
    pub fn effective_value(&self, record: &ClientRecord, field: EditableField) -> FieldValue {
        self.edits
            .get(&record.id)
            .and_then(|fields| fields.get(&field))
            .cloned()
            .unwrap_or_else(|| record.field_value(field))
    }

    /// Copy of the record as the user currently sees it.
    pub fn effective_record(&self, record: &ClientRecord) -> ClientRecord {
        match self.edits.get(&record.id) {
            None => record.clone(),
            Some(fields) => fields
                .values()
                .cloned()
                .fold(record.clone(), ClientRecord::with_value),
        }
    }

    pub fn has_edits(&self, id: &ClientId) -> bool {
        self.edits.contains_key(id)
    }

    /// Number of records with at least one pending edit.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Drops every pending edit.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.edits.clear();
        self
    }

    /// Drops the pending edits of one record.
    #[must_use]
    pub fn reset_record(mut self, id: &ClientId) -> Self {
        self.edits.remove(id);
        self
    }

    /// Pending edits ordered by client id then field, ready to be committed.
    pub fn into_edits(self) -> Vec<RecordEdits> {
        let mut edits: Vec<RecordEdits> = self
            .edits
            .into_iter()
            .map(|(id, fields)| {
                let mut fields: Vec<(EditableField, FieldValue)> = fields.into_iter().collect();
                fields.sort_by_key(|(field, _)| *field);
                RecordEdits {
                    id,
                    values: fields.into_iter().map(|(_, value)| value).collect(),
                }
            })
            .collect();
        edits.sort_by(|a, b| a.id.cmp(&b.id));
        edits
    }

    /// Borrowing variant of [`EditOverlay::into_edits`].
    pub fn edits(&self) -> Vec<RecordEdits> {
        self.clone().into_edits()
    }
}

/// Free-function form of [`EditOverlay::effective_value`].
pub fn effective_value(
    record: &ClientRecord,
    overlay: &EditOverlay,
    field: EditableField,
) -> FieldValue {
    overlay.effective_value(record, field)
}
