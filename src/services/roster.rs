//! Roster table, follow-up view, CSV export and filter choices.

use crate::domain::client::ClientRecord;
use crate::domain::settings::{Location, Priority};
use crate::domain::types::UNKNOWN_LOCATION;
use crate::dto::roster::{ClientsPage, ClientsQuery, ExportRow, FilterOptions, FollowUpQuery};
use crate::repository::{CatalogReader, ClientReader};
use crate::roster::{self, FilterCriteria, PageState, filter, pager};
use crate::services::{ServiceError, ServiceResult};
use crate::session::{RosterSession, SessionId, SessionStore};

/// Pending state of the session named in a query, or an empty one when the
/// request is not tied to a session.
pub(crate) fn session_state(
    sessions: &SessionStore,
    raw: Option<&str>,
) -> ServiceResult<RosterSession> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Ok(RosterSession::default()),
        Some(raw) => {
            let id: SessionId = raw.parse()?;
            Ok(sessions.get(&id)?)
        }
    }
}

fn load_roster<R>(repo: &R) -> ServiceResult<std::sync::Arc<[ClientRecord]>>
where
    R: ClientReader + ?Sized,
{
    repo.roster().map_err(|err| {
        log::error!("Failed to load the roster: {err}");
        ServiceError::from(err)
    })
}

/// Runs the query pipeline with the requested page pulled back into range.
fn page_of(
    records: &[ClientRecord],
    criteria: &FilterCriteria,
    requested: Option<usize>,
    page_size: usize,
    session: &RosterSession,
) -> ServiceResult<ClientsPage> {
    let matching = filter::filter(records, criteria).len();
    let state = PageState::new(page_size, 1)?
        .with_page(requested.unwrap_or(1))
        .clamp_to(pager::total_pages(matching, page_size));

    let view = roster::query(
        records,
        criteria,
        state,
        &session.selection,
        &session.overlay,
    );
    Ok(view.into())
}

/// Filtered, paginated roster decorated with the session's selection and
/// pending edits.
pub fn list_clients<R>(
    repo: &R,
    sessions: &SessionStore,
    query: &ClientsQuery,
    page_size: usize,
) -> ServiceResult<ClientsPage>
where
    R: ClientReader + ?Sized,
{
    let session = session_state(sessions, query.session.as_deref())?;
    let records = load_roster(repo)?;
    page_of(&records, &query.criteria(), query.page, page_size, &session)
}

/// Clients flagged for follow-up, with text search only.
pub fn list_follow_up<R>(
    repo: &R,
    sessions: &SessionStore,
    query: &FollowUpQuery,
    page_size: usize,
) -> ServiceResult<ClientsPage>
where
    R: ClientReader + ?Sized,
{
    let session = session_state(sessions, query.session.as_deref())?;
    let records: Vec<ClientRecord> = load_roster(repo)?
        .iter()
        .filter(|record| record.follow_up)
        .cloned()
        .collect();

    let criteria = FilterCriteria::new().search(
        query
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default(),
    );
    page_of(&records, &criteria, query.page, page_size, &session)
}

/// Every filtered record, across all pages, as CSV with a header row.
/// Pending edits of the session are exported as shown on screen.
pub fn export_clients<R>(
    repo: &R,
    sessions: &SessionStore,
    query: &ClientsQuery,
) -> ServiceResult<String>
where
    R: ClientReader + ?Sized,
{
    let session = session_state(sessions, query.session.as_deref())?;
    let records = load_roster(repo)?;

    let rows: Vec<ClientRecord> = filter::filter(&records, &query.criteria())
        .into_iter()
        .map(|record| session.overlay.effective_record(record))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in &rows {
        writer.serialize(ExportRow::from(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ServiceError::Internal(format!("csv export failed: {err}")))?;

    log::info!("Exported {} client(s)", rows.len());
    String::from_utf8(bytes).map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Choices of the location, agent and priority filters.
pub fn filter_options<R>(repo: &R) -> ServiceResult<FilterOptions>
where
    R: ClientReader + CatalogReader<Location> + CatalogReader<Priority> + ?Sized,
{
    let records = load_roster(repo)?;

    let mut locations: Vec<String> = CatalogReader::<Location>::list_entries(repo)?
        .into_iter()
        .map(|location| location.name.into_inner())
        .collect();
    if !locations.iter().any(|name| name == UNKNOWN_LOCATION) {
        locations.push(UNKNOWN_LOCATION.to_string());
    }

    let mut agents: Vec<String> = Vec::new();
    for record in records.iter() {
        if !agents.iter().any(|agent| agent == record.assigned_agent.as_str()) {
            agents.push(record.assigned_agent.to_string());
        }
    }

    let priorities = CatalogReader::<Priority>::list_entries(repo)?
        .into_iter()
        .map(|priority| priority.name.into_inner())
        .collect();

    Ok(FilterOptions {
        locations,
        agents,
        priorities,
    })
}
