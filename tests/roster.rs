use orbit_crm::domain::client::{ClientRecord, FieldValue};
use orbit_crm::domain::types::{ClientId, PriorityName};
use orbit_crm::repository::seed;
use orbit_crm::roster::{self, Constraint, EditOverlay, FilterCriteria, PageState, SelectionSet, filter};

fn ids(records: &[&ClientRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.as_str().to_string()).collect()
}

fn client_id(raw: &str) -> ClientId {
    ClientId::new(raw).unwrap()
}

#[test]
fn fifteen_records_split_into_two_pages_of_ten() {
    let clients = seed::clients();
    let criteria = FilterCriteria::new();

    let first = roster::query(
        &clients,
        &criteria,
        PageState::first(10),
        &SelectionSet::new(),
        &EditOverlay::new(),
    );
    assert_eq!(first.total_items, 15);
    assert_eq!(first.total_pages, 2);
    assert_eq!((first.start_index, first.end_index), (1, 10));
    let first_ids: Vec<&str> = first.rows.iter().map(|row| row.client.id.as_str()).collect();
    let expected: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
    assert_eq!(first_ids, expected);

    let second = roster::query(
        &clients,
        &criteria,
        PageState::new(10, 2).unwrap(),
        &SelectionSet::new(),
        &EditOverlay::new(),
    );
    assert_eq!((second.start_index, second.end_index), (11, 15));
    let second_ids: Vec<&str> = second.rows.iter().map(|row| row.client.id.as_str()).collect();
    assert_eq!(second_ids, vec!["11", "12", "13", "14", "15"]);
}

#[test]
fn search_is_case_insensitive_over_names() {
    let clients = seed::clients();
    let found = filter::filter(&clients, &FilterCriteria::new().search("aldair"));
    assert_eq!(ids(&found), vec!["3"]);
}

#[test]
fn location_filter_is_exact() {
    let clients = seed::clients();
    let criteria = FilterCriteria::new().location(Constraint::exactly("Bogotá"));
    assert_eq!(ids(&filter::filter(&clients, &criteria)), vec!["10"]);

    let partial = FilterCriteria::new().location(Constraint::exactly("Bogo"));
    assert!(filter::filter(&clients, &partial).is_empty());
}

#[test]
fn dimensions_combine_with_and() {
    let clients = seed::clients();
    let criteria = FilterCriteria::new()
        .agent(Constraint::exactly("Victor Guzmán"))
        .priority(Constraint::exactly("Alta"));

    assert_eq!(
        ids(&filter::filter(&clients, &criteria)),
        vec!["10", "11", "13"]
    );
}

#[test]
fn placeholder_choices_do_not_constrain() {
    let clients = seed::clients();
    let criteria = FilterCriteria::new()
        .location(Constraint::parse(Some("Sedes")))
        .agent(Constraint::parse(Some("Comercial")))
        .priority(Constraint::parse(None));

    assert!(criteria.is_identity());
    assert_eq!(filter::filter(&clients, &criteria).len(), clients.len());
}

#[test]
fn filtering_twice_changes_nothing() {
    let clients = seed::clients();
    let criteria = FilterCriteria::new().agent(Constraint::exactly("Mafe"));

    let once: Vec<ClientRecord> = filter::filter(&clients, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter::filter(&once, &criteria);

    assert_eq!(ids(&twice), vec!["7", "15"]);
    assert_eq!(twice.len(), once.len());
}

#[test]
fn pages_cover_the_filtered_list_exactly_once() {
    let clients = seed::clients();
    let criteria = FilterCriteria::new().agent(Constraint::exactly("Victor Guzmán"));
    let expected = roster::filtered_ids(&clients, &criteria);

    let mut seen = Vec::new();
    for page in 1..=4 {
        let view = roster::query(
            &clients,
            &criteria,
            PageState::new(3, page).unwrap(),
            &SelectionSet::new(),
            &EditOverlay::new(),
        );
        assert_eq!(view.total_pages, 3);
        seen.extend(view.rows.into_iter().map(|row| row.client.id));
    }

    assert_eq!(seen, expected);
}

#[test]
fn pending_edits_are_shown_but_not_filtered_on() {
    let clients = seed::clients();
    let overlay = EditOverlay::new().set_field(
        client_id("1"),
        FieldValue::PriorityTag(Some(PriorityName::new("Alta").unwrap())),
    );
    let selection = SelectionSet::new().toggle(client_id("10"));
    let criteria = FilterCriteria::new().priority(Constraint::exactly("Alta"));

    let view = roster::query(&clients, &criteria, PageState::first(10), &selection, &overlay);
    let shown: Vec<&str> = view.rows.iter().map(|row| row.client.id.as_str()).collect();
    assert_eq!(shown, vec!["10", "11", "13"]);
    assert!(view.rows[0].selected);
    assert!(!view.rows[1].selected);

    let all = roster::query(
        &clients,
        &FilterCriteria::new(),
        PageState::first(10),
        &selection,
        &overlay,
    );
    let first = &all.rows[0];
    assert!(first.edited);
    assert_eq!(
        first.client.priority_tag.as_ref().map(|tag| tag.as_str()),
        Some("Alta")
    );
    assert!(clients[0].priority_tag.is_none());
}

#[test]
fn selection_survives_filter_changes() {
    let clients = seed::clients();
    let selection = SelectionSet::new()
        .toggle(client_id("3"))
        .toggle(client_id("14"));

    let narrowed = roster::query(
        &clients,
        &FilterCriteria::new().location(Constraint::exactly("Bogotá")),
        PageState::first(10),
        &selection,
        &EditOverlay::new(),
    );
    assert!(narrowed.rows.iter().all(|row| !row.selected));
    assert_eq!(selection.len(), 2);
}

#[test]
fn empty_result_has_one_empty_page() {
    let clients = seed::clients();
    let view = roster::query(
        &clients,
        &FilterCriteria::new().search("zzz"),
        PageState::first(10),
        &SelectionSet::new(),
        &EditOverlay::new(),
    );

    assert!(view.rows.is_empty());
    assert_eq!(view.total_items, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!((view.start_index, view.end_index), (0, 0));
}
