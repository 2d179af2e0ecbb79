//! CRUD over the settings catalogs: priorities, call states, locations and
//! knowledge documents.

use crate::domain::settings::{Activatable, CatalogEntry};
use crate::domain::types::EntryId;
use crate::forms::settings::CatalogForm;
use crate::repository::{CatalogReader, CatalogToggle, CatalogWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_entries<T, R>(repo: &R) -> ServiceResult<Vec<T>>
where
    T: CatalogEntry,
    R: CatalogReader<T> + ?Sized,
{
    repo.list_entries().map_err(|err| {
        log::error!("Failed to list {} entries: {err}", T::KIND);
        ServiceError::from(err)
    })
}

/// Validates the form and stores a new entry under a fresh id. Invalid
/// input leaves the catalog untouched.
pub fn create_entry<F, R>(repo: &R, form: F) -> ServiceResult<F::Entry>
where
    F: CatalogForm,
    R: CatalogWriter<F::Entry> + ?Sized,
{
    let draft = form.into_valid_draft()?;
    let entry = repo.create_entry(draft).map_err(|err| {
        log::error!("Failed to create {}: {err}", <F::Entry as CatalogEntry>::KIND);
        ServiceError::from(err)
    })?;
    log::info!("Created {} {}", <F::Entry as CatalogEntry>::KIND, entry.name());
    Ok(entry)
}

pub fn update_entry<F, R>(repo: &R, id: &str, form: F) -> ServiceResult<F::Entry>
where
    F: CatalogForm,
    R: CatalogWriter<F::Entry> + ?Sized,
{
    let id = EntryId::new(id)?;
    let draft = form.into_valid_draft()?;
    Ok(repo.update_entry(&id, draft)?)
}

pub fn delete_entry<T, R>(repo: &R, id: &str) -> ServiceResult<()>
where
    T: CatalogEntry,
    R: CatalogWriter<T> + ?Sized,
{
    let id = EntryId::new(id)?;
    repo.delete_entry(&id)?;
    log::info!("Deleted {} {id}", T::KIND);
    Ok(())
}

/// Flips the active flag of a location, document or user.
pub fn toggle_entry<T, R>(repo: &R, id: &str) -> ServiceResult<T>
where
    T: CatalogEntry + Activatable,
    R: CatalogToggle<T> + ?Sized,
{
    let id = EntryId::new(id)?;
    Ok(repo.toggle_entry(&id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{KnowledgeDocument, Location, Priority};
    use crate::forms::settings::{KnowledgeDocumentForm, PriorityForm};
    use crate::repository::InMemoryRepository;

    fn priority_form(name: &str) -> PriorityForm {
        PriorityForm {
            name: name.to_string(),
            color: "#a855f7".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn created_entries_get_fresh_ids() {
        let repo = InMemoryRepository::demo();
        let a = create_entry(&repo, priority_form("Urgente")).unwrap();
        let b = create_entry(&repo, priority_form("Urgente")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(list_entries::<Priority, _>(&repo).unwrap().len(), 5);
    }

    #[test]
    fn invalid_form_does_not_mutate() {
        let repo = InMemoryRepository::demo();
        let result = create_entry(&repo, priority_form(" "));

        assert!(matches!(result, Err(ServiceError::Form(message)) if message == "El nombre es requerido"));
        assert_eq!(list_entries::<Priority, _>(&repo).unwrap().len(), 3);
    }

    #[test]
    fn update_keeps_the_id() {
        let repo = InMemoryRepository::demo();
        let updated = update_entry(&repo, "1", priority_form("Crítica")).unwrap();

        assert_eq!(updated.id.as_str(), "1");
        assert_eq!(updated.name.as_str(), "Crítica");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let repo = InMemoryRepository::demo();

        assert!(matches!(
            update_entry(&repo, "missing", priority_form("X")),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            delete_entry::<Priority, _>(&repo, "missing"),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            toggle_entry::<Location, _>(&repo, "missing"),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn toggle_flips_the_active_flag() {
        let repo = InMemoryRepository::demo();
        let location: Location = toggle_entry(&repo, "2").unwrap();
        assert!(!location.active);
        let location: Location = toggle_entry(&repo, "2").unwrap();
        assert!(location.active);
    }

    #[test]
    fn document_is_stamped_on_creation() {
        let repo = InMemoryRepository::demo();
        let doc: KnowledgeDocument = create_entry(
            &repo,
            KnowledgeDocumentForm {
                name: "Becas".to_string(),
                description: "<b>Convocatoria</b> 2026".to_string(),
                pdf_path: "/docs/becas.PDF".to_string(),
                active: true,
            },
        )
        .unwrap();

        assert_eq!(doc.description.as_str(), "<b>Convocatoria</b> 2026");
        assert!(doc.created_on <= chrono::Local::now().date_naive());
        assert!(delete_entry::<KnowledgeDocument, _>(&repo, doc.id.as_str()).is_ok());
    }
}
