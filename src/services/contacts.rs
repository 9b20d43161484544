//! Contact inbox of the admin panel.

use crate::domain::contact::ContactStatusChange;
use crate::domain::types::{ContactStatus, EntityId};
use crate::dto::admin::{ContactRow, ContactsPageData, DeleteOutcome};
use crate::forms::contact::ContactStatusForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{ResourceReader, ResourceWriter};
use crate::resources::Contacts;
use crate::services::admin::delete_resource;
use crate::services::pages::format_date;
use crate::services::{ServiceError, ServiceResult};

pub async fn load_contacts<R>(repo: &R) -> ServiceResult<ContactsPageData>
where
    R: ResourceReader + ?Sized,
{
    let statuses = ContactStatus::ALL.iter().map(|s| s.as_str()).collect();
    let (contacts, notice) = match repo.list::<Contacts>().await {
        Ok(contacts) => (contacts, None),
        Err(RepositoryError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to fetch contacts: {err}");
            (Vec::new(), Some("Failed to fetch contacts".to_string()))
        }
    };

    let contacts = contacts
        .into_iter()
        .map(|contact| ContactRow {
            received_on: format_date(contact.created_at),
            contact,
        })
        .collect();

    Ok(ContactsPageData {
        contacts,
        statuses,
        notice,
    })
}

/// Moves a contact request to another status; anything past `pending`
/// also marks it read.
pub async fn update_status<R>(repo: &R, id: &str, form: &ContactStatusForm) -> ServiceResult<String>
where
    R: ResourceWriter + ?Sized,
{
    let status = form
        .status()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    let id = EntityId::new(id)?;
    repo.update::<Contacts, _>(&id, &ContactStatusChange::from(status))
        .await
        .map_err(|err| ServiceError::backend(err, "Update failed"))?;
    Ok("Status updated successfully".to_string())
}

pub async fn delete_contact<R>(repo: &R, id: &str, confirmed: bool) -> ServiceResult<DeleteOutcome>
where
    R: ResourceWriter + ?Sized,
{
    delete_resource::<Contacts, _>(repo, id, confirmed).await
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockTransport, call};

    #[actix_web::test]
    async fn contacts_are_listed_with_received_date() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "GET /contact")
            .times(1)
            .returning(|_| {
                Ok(json!([{
                    "_id": "m1",
                    "fullName": "Jane Roe",
                    "email": "jane@example.com",
                    "subject": null,
                    "message": "Hello",
                    "status": "escalated",
                    "createdAt": "2024-03-05T10:00:00Z"
                }]))
            });

        let page = load_contacts(&repo).await.unwrap();
        assert_eq!(page.contacts.len(), 1);
        assert_eq!(page.contacts[0].received_on.as_deref(), Some("Mar 5, 2024"));
        assert_eq!(page.statuses, vec!["pending", "read", "replied", "archived"]);
        assert!(page.notice.is_none());
    }

    #[actix_web::test]
    async fn replied_status_marks_contact_read() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| {
                call(req) == "PATCH /contact/m1"
                    && req.body == Some(json!({"status": "replied", "isRead": true}))
            })
            .times(1)
            .returning(|_| Ok(Value::Null));

        let form = ContactStatusForm {
            status: "replied".into(),
        };
        let message = update_status(&repo, "m1", &form).await.unwrap();
        assert_eq!(message, "Status updated successfully");
    }

    #[actix_web::test]
    async fn unknown_status_is_rejected_locally() {
        let mut repo = MockTransport::new();
        repo.expect_send().times(0);

        let form = ContactStatusForm {
            status: "spam".into(),
        };
        assert!(matches!(
            update_status(&repo, "m1", &form).await,
            Err(ServiceError::Form(_))
        ));
    }

    #[actix_web::test]
    async fn failed_update_reports_fallback() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .returning(|_| Err(RepositoryError::Network("connection refused".into())));

        let form = ContactStatusForm {
            status: "read".into(),
        };
        assert_eq!(
            update_status(&repo, "m1", &form).await,
            Err(ServiceError::Backend("Update failed".into()))
        );
    }

    #[actix_web::test]
    async fn delete_requires_confirmation() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "DELETE /contact/m1")
            .times(1)
            .returning(|_| Ok(Value::Null));

        assert_eq!(
            delete_contact(&repo, "m1", false).await.unwrap(),
            DeleteOutcome::Cancelled
        );
        assert_eq!(
            delete_contact(&repo, "m1", true).await.unwrap(),
            DeleteOutcome::Deleted("Contact deleted successfully".into())
        );
    }
}
