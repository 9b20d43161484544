//! Footer editor of the admin panel.

use validator::Validate;

use crate::dto::admin::FooterEditorData;
use crate::forms::footer::FooterForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{ContentReader, FooterWriter};
use crate::services::{ServiceError, ServiceResult};

pub async fn load_footer_editor<R>(repo: &R) -> ServiceResult<FooterEditorData>
where
    R: ContentReader + ?Sized,
{
    match repo.footer().await {
        Ok(Some(footer)) => Ok(FooterEditorData {
            form: FooterForm::from_footer(&footer),
            footer_id: Some(footer.id),
            notice: None,
        }),
        Ok(None) => Ok(FooterEditorData {
            form: FooterForm::default(),
            footer_id: None,
            notice: None,
        }),
        Err(RepositoryError::Unauthorized) => Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to fetch footer: {err}");
            Ok(FooterEditorData {
                form: FooterForm::default(),
                footer_id: None,
                notice: Some("Failed to fetch footer".to_string()),
            })
        }
    }
}

/// Creates the footer on first save and patches the existing record after.
pub async fn save_footer<R>(repo: &R, form: &FooterForm) -> ServiceResult<String>
where
    R: ContentReader + FooterWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::warn!("Invalid footer form: {err}");
        return Err(ServiceError::Form(
            "Please fill in all required fields".to_string(),
        ));
    }

    let existing = repo
        .footer()
        .await
        .map_err(|err| ServiceError::backend(err, "Operation failed"))?
        .map(|footer| footer.id);

    repo.save_footer(existing.as_ref(), &form.to_content())
        .await
        .map_err(|err| ServiceError::backend(err, "Operation failed"))?;

    Ok(match existing {
        Some(_) => "Footer updated successfully",
        None => "Footer created successfully",
    }
    .to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockTransport, call};

    fn filled() -> FooterForm {
        FooterForm {
            company_name: "Acme".into(),
            tagline: "We build things".into(),
            ..FooterForm::default()
        }
    }

    #[actix_web::test]
    async fn editor_is_prefilled_from_existing_footer() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "GET /footer")
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "_id": "f1",
                    "companyName": "Acme",
                    "companyLinks": [{"label": "About", "url": "/about"}]
                }))
            });

        let editor = load_footer_editor(&repo).await.unwrap();
        assert_eq!(editor.footer_id.unwrap().as_str(), "f1");
        assert_eq!(editor.form.company_name, "Acme");
        assert_eq!(editor.form.company_link_label, vec!["About"]);
    }

    #[actix_web::test]
    async fn unreachable_backend_leaves_blank_editor_with_notice() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .returning(|_| Err(RepositoryError::Network("connection refused".into())));

        let editor = load_footer_editor(&repo).await.unwrap();
        assert!(editor.footer_id.is_none());
        assert_eq!(editor.notice.as_deref(), Some("Failed to fetch footer"));
    }

    #[actix_web::test]
    async fn first_save_creates_footer() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "GET /footer")
            .times(1)
            .returning(|_| Ok(Value::Null));
        repo.expect_send()
            .withf(|req| call(req) == "POST /footer")
            .times(1)
            .returning(|_| Ok(Value::Null));

        let message = save_footer(&repo, &filled()).await.unwrap();
        assert_eq!(message, "Footer created successfully");
    }

    #[actix_web::test]
    async fn later_saves_patch_existing_footer() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "GET /footer")
            .times(1)
            .returning(|_| Ok(json!({"_id": "f1", "companyName": "Old"})));
        repo.expect_send()
            .withf(|req| {
                call(req) == "PATCH /footer/f1"
                    && req.body.as_ref().is_some_and(|body| body["companyName"] == "Acme")
            })
            .times(1)
            .returning(|_| Ok(Value::Null));

        let message = save_footer(&repo, &filled()).await.unwrap();
        assert_eq!(message, "Footer updated successfully");
    }

    #[actix_web::test]
    async fn invalid_footer_is_not_sent() {
        let mut repo = MockTransport::new();
        repo.expect_send().times(0);

        let result = save_footer(&repo, &FooterForm::default()).await;
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
