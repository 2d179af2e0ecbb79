//! Dashboard user administration.

use crate::domain::user::User;
use crate::dto::users::UsersQuery;
use crate::forms::settings::CatalogForm;
use crate::forms::users::AddUserForm;
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryError;
use crate::repository::{CatalogReader, CatalogToggle, UserWriter};
use crate::roster::{PageState, pager};
use crate::services::{ServiceError, ServiceResult, settings};

/// Users whose name or email contains the search text, paginated.
pub fn list_users<R>(repo: &R, query: &UsersQuery, page_size: usize) -> ServiceResult<Paginated<User>>
where
    R: CatalogReader<User> + ?Sized,
{
    let search = query.search.as_deref().map(str::trim).unwrap_or_default();
    let users: Vec<User> = settings::list_entries::<User, R>(repo)?
        .into_iter()
        .filter(|user| user.matches(search))
        .collect();

    let state = PageState::new(page_size, 1)?
        .with_page(query.page.unwrap_or(1))
        .clamp_to(pager::total_pages(users.len(), page_size));

    Ok(pager::paginate(&users, state).into())
}

/// Adds an active user. Emails are unique.
pub fn add_user<R>(repo: &R, form: AddUserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let draft = form.into_valid_draft()?;
    match repo.create_user(draft) {
        Ok(user) => {
            log::info!("Created user {}", user.name);
            Ok(user)
        }
        Err(RepositoryError::DuplicateEmail(_)) => Err(ServiceError::Form(
            "El correo ya está registrado".to_string(),
        )),
        Err(err) => {
            log::error!("Failed to create user: {err}");
            Err(err.into())
        }
    }
}

pub fn toggle_user<R>(repo: &R, id: &str) -> ServiceResult<User>
where
    R: CatalogToggle<User> + ?Sized,
{
    settings::toggle_entry::<User, R>(repo, id)
}
