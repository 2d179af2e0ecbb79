//! Query parameters and payloads of the roster endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::client::ClientRecord;
use crate::pagination::Paginated;
use crate::roster::{Constraint, FilterCriteria, RosterRow};

/// Query string of the roster table, export and "select all".
#[derive(Debug, Default, Deserialize)]
pub struct ClientsQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub agent: Option<String>,
    pub priority: Option<String>,
    pub page: Option<usize>,
    /// Session whose selection and pending edits decorate the rows.
    pub session: Option<String>,
}

impl ClientsQuery {
    /// Filter criteria with the search text trimmed and placeholders
    /// read as "any".
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .search(self.search.as_deref().map(str::trim).unwrap_or_default())
            .location(Constraint::parse(self.location.as_deref()))
            .agent(Constraint::parse(self.agent.as_deref()))
            .priority(Constraint::parse(self.priority.as_deref()))
    }
}

/// Query string of the follow-up view, which only offers text search.
#[derive(Debug, Default, Deserialize)]
pub struct FollowUpQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub session: Option<String>,
}

pub type ClientsPage = Paginated<RosterRow>;

/// Choices offered by the three categorical filters.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub agents: Vec<String>,
    pub priorities: Vec<String>,
}

/// One line of the CSV export.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub assigned_agent: &'a str,
    pub priority: &'a str,
    pub call_status: &'static str,
    pub interest_status: &'static str,
    pub follow_up: bool,
    pub registration: &'static str,
    pub call_count: u32,
    pub last_call_on: Option<NaiveDate>,
    pub registered_on: NaiveDate,
    pub last_interaction_at: NaiveDateTime,
    pub notes: &'a str,
}

impl<'a> From<&'a ClientRecord> for ExportRow<'a> {
    fn from(record: &'a ClientRecord) -> Self {
        Self {
            id: record.id.as_str(),
            name: record.name.as_str(),
            phone: &record.phone,
            location: record.location.as_str(),
            assigned_agent: record.assigned_agent.as_str(),
            priority: record.priority_tag.as_deref().unwrap_or_default(),
            call_status: record.call_status.as_str(),
            interest_status: record
                .interest_status
                .map(|s| s.as_str())
                .unwrap_or_default(),
            follow_up: record.follow_up,
            registration: record.registration.as_str(),
            call_count: record.call_count,
            last_call_on: record.last_call_on,
            registered_on: record.registered_on,
            last_interaction_at: record.last_interaction_at,
            notes: &record.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_and_blank_search_give_identity_criteria() {
        let query = ClientsQuery {
            search: Some("   ".to_string()),
            location: Some("Todas".to_string()),
            agent: Some("Todos".to_string()),
            priority: Some(String::new()),
            ..ClientsQuery::default()
        };
        assert!(query.criteria().is_identity());
    }

    #[test]
    fn search_text_is_trimmed() {
        let query = ClientsQuery {
            search: Some("  aldair ".to_string()),
            ..ClientsQuery::default()
        };
        assert_eq!(query.criteria().search_text, "aldair");
    }
}
