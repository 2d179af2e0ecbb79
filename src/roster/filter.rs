//! Free-text and categorical filtering of the client roster.

use serde::Serialize;

use crate::domain::client::ClientRecord;

/// Reserved filter value meaning "do not constrain this dimension".
pub const ANY: &str = "ANY";

/// Labels the dashboard renders for the unconstrained choice of a filter.
const ANY_LABELS: [&str; 6] = [ANY, "Todas", "Todos", "Sedes", "Comercial", "Prioridad"];

/// Constraint on one categorical dimension.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum Constraint {
    #[default]
    Any,
    Exactly(String),
}

impl Constraint {
    /// Maps raw user input to a constraint. Missing, blank and placeholder
    /// values all mean [`Constraint::Any`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => Constraint::Any,
            Some(value) if value.is_empty() || ANY_LABELS.contains(&value) => Constraint::Any,
            Some(value) => Constraint::Exactly(value.to_string()),
        }
    }

    pub fn exactly<S: Into<String>>(value: S) -> Self {
        Constraint::Exactly(value.into())
    }

    /// Case-sensitive equality against the record's value. An unset value
    /// only passes an unconstrained dimension.
    pub fn permits(&self, value: Option<&str>) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Exactly(expected) => value == Some(expected.as_str()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }
}

/// Filter dimensions chosen by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub location: Constraint,
    pub agent: Constraint,
    pub priority: Constraint,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn location(mut self, constraint: Constraint) -> Self {
        self.location = constraint;
        self
    }

    pub fn agent(mut self, constraint: Constraint) -> Self {
        self.agent = constraint;
        self
    }

    pub fn priority(mut self, constraint: Constraint) -> Self {
        self.priority = constraint;
        self
    }

    /// True when the criteria let every record through.
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty()
            && self.location.is_any()
            && self.agent.is_any()
            && self.priority.is_any()
    }
}

/// Criteria with the search needle case-folded once for a whole pass.
struct Predicate<'a> {
    criteria: &'a FilterCriteria,
    needle: String,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search_text.to_lowercase(),
        }
    }

    fn test(&self, record: &ClientRecord) -> bool {
        let text = &self.criteria.search_text;
        let text_match = text.is_empty()
            || record.name.to_lowercase().contains(&self.needle)
            || record.phone.contains(text.as_str());

        text_match
            && self.criteria.location.permits(Some(record.location.as_str()))
            && self.criteria.agent.permits(Some(record.assigned_agent.as_str()))
            && self
                .criteria
                .priority
                .permits(record.priority_tag.as_deref())
    }
}

/// Whether a single record passes every filter dimension.
pub fn matches(record: &ClientRecord, criteria: &FilterCriteria) -> bool {
    Predicate::new(criteria).test(record)
}

/// Applies the criteria to the roster, keeping the original order.
pub fn filter<'a>(roster: &'a [ClientRecord], criteria: &FilterCriteria) -> Vec<&'a ClientRecord> {
    let predicate = Predicate::new(criteria);
    roster.iter().filter(|record| predicate.test(record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed;

    #[test]
    fn placeholders_parse_as_any() {
        for raw in [None, Some(""), Some("  "), Some("ANY"), Some("Todas"), Some("Sedes")] {
            assert_eq!(Constraint::parse(raw), Constraint::Any);
        }
        assert_eq!(
            Constraint::parse(Some(" Bogotá ")),
            Constraint::exactly("Bogotá")
        );
    }

    #[test]
    fn categorical_match_is_case_sensitive() {
        let roster = seed::clients();
        let bogota = roster.iter().find(|c| c.id.as_str() == "10").unwrap();

        assert!(matches(
            bogota,
            &FilterCriteria::new().location(Constraint::exactly("Bogotá"))
        ));
        assert!(!matches(
            bogota,
            &FilterCriteria::new().location(Constraint::exactly("bogotá"))
        ));
    }

    #[test]
    fn unset_priority_only_passes_any() {
        let roster = seed::clients();
        let unset = roster.iter().find(|c| c.priority_tag.is_none()).unwrap();

        assert!(matches(unset, &FilterCriteria::new()));
        assert!(!matches(
            unset,
            &FilterCriteria::new().priority(Constraint::exactly("Alta"))
        ));
    }

    #[test]
    fn phone_match_is_literal() {
        let roster = seed::clients();
        let hits = filter(&roster, &FilterCriteria::new().search("320 111"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_str(), "Aldair");
    }

    #[test]
    fn dimensions_combine_with_and() {
        let roster = seed::clients();
        let criteria = FilterCriteria::new()
            .search("oscar")
            .agent(Constraint::exactly("Victor Guzmán"));
        let ids: Vec<_> = filter(&roster, &criteria)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["10"]);
    }
}
