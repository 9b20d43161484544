//! Visitor submissions: contact requests and newsletter sign-ups.

use validator::Validate;

use crate::domain::contact::{CONTACT_SUBJECTS, ContactInfo};
use crate::dto::public::ContactPageData;
use crate::forms::contact::ContactForm;
use crate::forms::newsletter::NewsletterForm;
use crate::repository::InboxWriter;
use crate::services::{ServiceError, ServiceResult};

pub const CONTACT_SENT: &str = "Thank you for your message! We will get back to you soon.";
pub const SUBSCRIBED: &str = "Successfully subscribed to newsletter!";

pub fn contact_page(info: ContactInfo) -> ContactPageData {
    ContactPageData {
        info,
        subjects: &CONTACT_SUBJECTS,
    }
}

/// Validates and forwards a contact request to the backend.
pub async fn submit_contact<R>(repo: &R, form: ContactForm) -> ServiceResult<()>
where
    R: InboxWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::warn!("Rejected contact form: {err}");
        return Err(ServiceError::Form(
            "Please fill in every field and use a valid email address.".to_string(),
        ));
    }

    repo.submit_contact(&form)
        .await
        .map_err(|err| ServiceError::backend(err, "Failed to send message. Please try again."))
}

pub async fn subscribe<R>(repo: &R, form: NewsletterForm) -> ServiceResult<()>
where
    R: InboxWriter + ?Sized,
{
    if form.validate().is_err() {
        return Err(ServiceError::Form("Please enter a valid email address.".to_string()));
    }

    repo.subscribe_newsletter(&form)
        .await
        .map_err(|err| ServiceError::backend(err, "Failed to subscribe"))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockTransport, call};

    fn contact() -> ContactForm {
        ContactForm {
            full_name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            subject: "Sales Inquiry".into(),
            message: "We need an app".into(),
        }
    }

    #[actix_web::test]
    async fn valid_contact_is_posted_as_camel_case_json() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| {
                call(req) == "POST /contact"
                    && req.body
                        == Some(json!({
                            "fullName": "Jane Roe",
                            "email": "jane@example.com",
                            "subject": "Sales Inquiry",
                            "message": "We need an app",
                        }))
            })
            .times(1)
            .returning(|_| Ok(Value::Null));

        submit_contact(&repo, contact()).await.unwrap();
    }

    #[actix_web::test]
    async fn invalid_contact_issues_no_request() {
        let mut repo = MockTransport::new();
        repo.expect_send().times(0);

        let form = ContactForm {
            email: "not-an-email".into(),
            ..contact()
        };
        assert!(matches!(
            submit_contact(&repo, form).await,
            Err(ServiceError::Form(_))
        ));
    }

    #[actix_web::test]
    async fn backend_rejection_message_is_surfaced() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "POST /newsletter/subscribe")
            .times(1)
            .returning(|_| {
                Err(RepositoryError::Status {
                    status: 409,
                    message: "Email already subscribed".into(),
                })
            });

        let form = NewsletterForm {
            email: "jane@example.com".into(),
        };
        assert_eq!(
            subscribe(&repo, form).await,
            Err(ServiceError::Backend("Email already subscribed".into()))
        );
    }
}
