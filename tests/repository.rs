use std::sync::Arc;

use orbit_crm::domain::client::{CallStatus, FieldValue};
use orbit_crm::domain::settings::{Location, LocationDraft, Priority};
use orbit_crm::domain::types::{AgentName, ClientId, EntryId, LocationName};
use orbit_crm::repository::errors::RepositoryError;
use orbit_crm::repository::{
    CatalogReader, CatalogToggle, CatalogWriter, ChatReader, ClientReader, ClientWriter,
    InMemoryRepository, TemplateReader,
};
use orbit_crm::roster::overlay::RecordEdits;

fn client_id(raw: &str) -> ClientId {
    ClientId::new(raw).unwrap()
}

fn draft(name: &str) -> LocationDraft {
    LocationDraft {
        name: LocationName::new(name).unwrap(),
        address: "Calle 10 # 5-20".to_string(),
        phone: "601 555 0000".to_string(),
        active: true,
    }
}

#[test]
fn demo_store_is_seeded() {
    let repo = InMemoryRepository::demo();

    assert_eq!(repo.roster().unwrap().len(), 15);
    assert_eq!(CatalogReader::<Priority>::list_entries(&repo).unwrap().len(), 3);
    assert_eq!(CatalogReader::<Location>::list_entries(&repo).unwrap().len(), 7);
    assert_eq!(repo.list_templates().unwrap().len(), 16);
    assert_eq!(repo.list_chats().unwrap().len(), 7);
}

#[test]
fn committing_edits_swaps_the_snapshot() {
    let repo = InMemoryRepository::demo();
    let before = repo.roster().unwrap();

    let changed = repo
        .apply_client_edits(&[RecordEdits {
            id: client_id("2"),
            values: vec![
                FieldValue::CallStatus(CallStatus::Contacted),
                FieldValue::AssignedAgent(AgentName::new("Mafe").unwrap()),
            ],
        }])
        .unwrap();
    assert_eq!(changed, 1);

    let after = repo.roster().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));

    let edited = repo.get_client(&client_id("2")).unwrap().unwrap();
    assert_eq!(edited.call_status, CallStatus::Contacted);
    assert_eq!(edited.assigned_agent.as_str(), "Mafe");

    // Readers holding the old snapshot keep seeing the old values.
    assert_eq!(before[1].assigned_agent.as_str(), "Victor Guzmán");
}

#[test]
fn edits_of_unknown_records_are_ignored() {
    let repo = InMemoryRepository::demo();
    let changed = repo
        .apply_client_edits(&[RecordEdits {
            id: client_id("404"),
            values: vec![FieldValue::CallStatus(CallStatus::Contacted)],
        }])
        .unwrap();

    assert_eq!(changed, 0);
    assert_eq!(repo.roster().unwrap().len(), 15);
}

#[test]
fn location_catalog_crud() {
    let repo = InMemoryRepository::demo();

    let created: Location = repo.create_entry(draft("Tunja")).unwrap();
    assert!(created.active);
    assert_eq!(CatalogReader::<Location>::list_entries(&repo).unwrap().len(), 8);

    let renamed: Location = repo.update_entry(&created.id, draft("Tunja Centro")).unwrap();
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name.as_str(), "Tunja Centro");

    let toggled: Location = repo.toggle_entry(&created.id).unwrap();
    assert!(!toggled.active);

    CatalogWriter::<Location>::delete_entry(&repo, &created.id).unwrap();
    assert!(
        CatalogReader::<Location>::get_entry(&repo, &created.id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn unknown_catalog_ids_are_not_found() {
    let repo = InMemoryRepository::demo();
    let missing = EntryId::new("missing").unwrap();

    let update = CatalogWriter::<Location>::update_entry(&repo, &missing, draft("X"));
    assert!(matches!(update, Err(RepositoryError::NotFound)));

    let delete = CatalogWriter::<Location>::delete_entry(&repo, &missing);
    assert!(matches!(delete, Err(RepositoryError::NotFound)));

    let toggle = CatalogToggle::<Location>::toggle_entry(&repo, &missing);
    assert!(matches!(toggle, Err(RepositoryError::NotFound)));
}

#[test]
fn clones_share_the_same_store() {
    let repo = InMemoryRepository::demo();
    let handle = repo.clone();

    CatalogWriter::<Location>::create_entry(&handle, draft("Neiva")).unwrap();
    assert_eq!(CatalogReader::<Location>::list_entries(&repo).unwrap().len(), 8);
}
