//! Client roster query engine.
//!
//! Pure functions deriving the visible page of clients from a roster
//! snapshot: the roster is filtered, the filtered list is paged, and every
//! visible row is decorated with its selection flag and the effective
//! values of the pending edit overlay.

use serde::Serialize;

use crate::domain::client::ClientRecord;
use crate::domain::types::ClientId;

pub mod filter;
pub mod overlay;
pub mod pager;
pub mod selection;

pub use filter::{Constraint, FilterCriteria};
pub use overlay::EditOverlay;
pub use pager::PageState;
pub use selection::SelectionSet;

/// One rendered row of the roster table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RosterRow {
    /// Record with pending edits applied.
    pub client: ClientRecord,
    pub selected: bool,
    /// Whether any field of this row has an uncommitted edit.
    pub edited: bool,
}

/// Visible page of the roster and its paging metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RosterView {
    pub rows: Vec<RosterRow>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Runs filter, pager and row decoration over a roster snapshot.
pub fn query(
    roster: &[ClientRecord],
    criteria: &FilterCriteria,
    page: PageState,
    selection: &SelectionSet,
    overlay: &EditOverlay,
) -> RosterView {
    let filtered = filter::filter(roster, criteria);
    let slice = pager::paginate(&filtered, page);

    let rows = slice
        .visible_items
        .iter()
        .map(|record| RosterRow {
            client: overlay.effective_record(record),
            selected: selection.is_selected(&record.id),
            edited: overlay.has_edits(&record.id),
        })
        .collect();

    RosterView {
        rows,
        total_items: slice.total_items,
        total_pages: slice.total_pages,
        current_page: slice.current_page,
        start_index: slice.start_index,
        end_index: slice.end_index,
    }
}

/// Ids of every record passing the criteria, across all pages.
pub fn filtered_ids(roster: &[ClientRecord], criteria: &FilterCriteria) -> Vec<ClientId> {
    filter::filter(roster, criteria)
        .into_iter()
        .map(|record| record.id.clone())
        .collect()
}
