//! Two-step broadcast wizard: pick a template, then choose the audience and
//! send. Sending only records the broadcast; nothing leaves the process.

use chrono::Local;

use crate::domain::broadcast::{
    Audience, Broadcast, BroadcastDraft, MessageTemplate, WizardError,
};
use crate::domain::types::EntryId;
use crate::dto::session::SessionData;
use crate::forms::broadcast::{SelectTemplateForm, SendBroadcastForm, SendBroadcastPayload};
use crate::repository::{BroadcastReader, BroadcastWriter, ClientReader, TemplateReader};
use crate::services::{ServiceError, ServiceResult};
use crate::session::{SessionId, SessionStore};

pub fn list_templates<R>(repo: &R) -> ServiceResult<Vec<MessageTemplate>>
where
    R: TemplateReader + ?Sized,
{
    Ok(repo.list_templates()?)
}

pub fn select_template<R>(
    repo: &R,
    sessions: &SessionStore,
    id: &SessionId,
    form: SelectTemplateForm,
) -> ServiceResult<SessionData>
where
    R: TemplateReader + ?Sized,
{
    let template_id = EntryId::try_from(form)?;
    if repo.get_template(&template_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let session = sessions.update(id, |mut session| {
        session.broadcast = session.broadcast.select_template(template_id);
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

/// Moves to the send step; fails while no template is chosen.
pub fn continue_wizard(sessions: &SessionStore, id: &SessionId) -> ServiceResult<SessionData> {
    let session = sessions.try_update(id, |mut session| {
        session.broadcast = session.broadcast.advance()?;
        Ok::<_, ServiceError>(session)
    })?;
    Ok(SessionData::new(*id, &session))
}

pub fn reset_wizard(sessions: &SessionStore, id: &SessionId) -> ServiceResult<SessionData> {
    let session = sessions.update(id, |mut session| {
        session.broadcast = BroadcastDraft::default();
        session
    })?;
    Ok(SessionData::new(*id, &session))
}

/// Resolves the audience against the current store, records the broadcast
/// and resets the wizard. Selected ids that left the store are skipped.
pub fn send_broadcast<R>(
    repo: &R,
    sessions: &SessionStore,
    id: &SessionId,
    form: SendBroadcastForm,
) -> ServiceResult<Broadcast>
where
    R: ClientReader + TemplateReader + BroadcastWriter + ?Sized,
{
    let payload = SendBroadcastPayload::try_from(form)?;
    let mut sent = None;

    sessions.try_update(id, |mut session| {
        let template_id = session.broadcast.ready_template()?.clone();
        let template = repo
            .get_template(&template_id)?
            .ok_or(ServiceError::NotFound)?;

        let recipients: Vec<_> = repo
            .roster()?
            .iter()
            .filter(|record| match payload.audience {
                Audience::Selected => session.selection.is_selected(&record.id),
                audience => audience.includes(record),
            })
            .map(|record| record.id.clone())
            .collect();

        if recipients.is_empty() {
            return Err(WizardError::NoRecipients.into());
        }

        let broadcast = Broadcast {
            id: EntryId::generate(),
            template_id,
            template_name: template.name,
            audience: payload.audience,
            recipients,
            scheduled_for: payload.scheduled_for,
            created_at: Local::now().naive_local(),
        };
        repo.record_broadcast(&broadcast).map_err(|err| {
            log::error!("Failed to record broadcast: {err}");
            ServiceError::from(err)
        })?;

        log::info!(
            "Recorded broadcast {} of template {} to {} client(s)",
            broadcast.id,
            broadcast.template_name,
            broadcast.recipients.len()
        );
        sent = Some(broadcast);
        session.broadcast = BroadcastDraft::default();
        Ok::<_, ServiceError>(session)
    })?;

    sent.ok_or_else(|| ServiceError::Internal("broadcast was not recorded".to_string()))
}

pub fn list_broadcasts<R>(repo: &R) -> ServiceResult<Vec<Broadcast>>
where
    R: BroadcastReader + ?Sized,
{
    Ok(repo.list_broadcasts()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::broadcast::WizardStep;
    use crate::domain::types::ClientId;
    use crate::repository::InMemoryRepository;
    use crate::repository::mock::MockRepository;

    fn send_form(audience: &str) -> SendBroadcastForm {
        serde_html_form::from_str(&format!("audience={audience}")).unwrap()
    }

    fn ready_session(repo: &InMemoryRepository, sessions: &SessionStore) -> SessionId {
        let id = sessions.open().unwrap();
        select_template(
            repo,
            sessions,
            &id,
            SelectTemplateForm {
                template_id: "2".to_string(),
            },
        )
        .unwrap();
        continue_wizard(sessions, &id).unwrap();
        id
    }

    #[test]
    fn continuing_without_template_is_rejected() {
        let sessions = SessionStore::new();
        let id = sessions.open().unwrap();

        let result = continue_wizard(&sessions, &id);
        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert_eq!(
            sessions.get(&id).unwrap().broadcast.step,
            WizardStep::SelectTemplate
        );
    }

    #[test]
    fn sending_to_follow_up_records_and_resets() {
        let repo = InMemoryRepository::demo();
        let sessions = SessionStore::new();
        let id = ready_session(&repo, &sessions);

        let broadcast = send_broadcast(&repo, &sessions, &id, send_form("follow_up")).unwrap();

        assert_eq!(broadcast.template_name.as_str(), "bienvenida");
        assert_eq!(broadcast.recipients.len(), 7);
        assert_eq!(list_broadcasts(&repo).unwrap().len(), 1);
        assert_eq!(sessions.get(&id).unwrap().broadcast, BroadcastDraft::default());
    }

    #[test]
    fn selected_audience_skips_unknown_ids_and_keeps_roster_order() {
        let repo = InMemoryRepository::demo();
        let sessions = SessionStore::new();
        let id = ready_session(&repo, &sessions);
        sessions
            .update(&id, |mut session| {
                session.selection = session.selection.select_all(
                    ["12", "3", "gone"].map(|raw| ClientId::new(raw).unwrap()),
                );
                session
            })
            .unwrap();

        let broadcast = send_broadcast(&repo, &sessions, &id, send_form("selected")).unwrap();
        let ids: Vec<&str> = broadcast.recipients.iter().map(|c| c.as_str()).collect();
        assert_eq!(ids, vec!["3", "12"]);
    }

    #[test]
    fn empty_audience_is_rejected_and_wizard_kept() {
        let repo = InMemoryRepository::demo();
        let sessions = SessionStore::new();
        let id = ready_session(&repo, &sessions);

        let result = send_broadcast(&repo, &sessions, &id, send_form("selected"));
        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert_eq!(
            sessions.get(&id).unwrap().broadcast.step,
            WizardStep::ConfigureSend
        );
        assert!(list_broadcasts(&repo).unwrap().is_empty());
    }

    #[test]
    fn unknown_template_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_template().returning(|_| Ok(None));
        let sessions = SessionStore::new();
        let id = sessions.open().unwrap();

        let result = select_template(
            &repo,
            &sessions,
            &id,
            SelectTemplateForm {
                template_id: "77".to_string(),
            },
        );
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
