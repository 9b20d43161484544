use validator::Validate;

use crate::forms::auth::LoginForm;
use crate::repository::AuthWriter;
use crate::repository::errors::RepositoryError;
use crate::services::{ServiceError, ServiceResult};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Exchanges admin credentials for the backend bearer token.
pub async fn login<R>(repo: &R, form: LoginForm) -> ServiceResult<String>
where
    R: AuthWriter + ?Sized,
{
    if form.validate().is_err() {
        return Err(ServiceError::Form(INVALID_CREDENTIALS.to_string()));
    }

    match repo.login(&form).await {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        Ok(_) => Err(ServiceError::Backend("Login failed".to_string())),
        Err(
            RepositoryError::Unauthorized
            | RepositoryError::NotFound
            | RepositoryError::Rejected(_)
            | RepositoryError::Status { status: 400..=499, .. },
        ) => Err(ServiceError::Form(INVALID_CREDENTIALS.to_string())),
        Err(err) => Err(ServiceError::backend(err, "Login failed")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::repository::mock::{MockTransport, call};

    fn credentials() -> LoginForm {
        LoginForm {
            email: "admin@example.com".into(),
            password: "secret".into(),
        }
    }

    #[actix_web::test]
    async fn successful_login_yields_token() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| {
                call(req) == "POST /auth/login"
                    && req.body == Some(json!({"email": "admin@example.com", "password": "secret"}))
            })
            .times(1)
            .returning(|_| Ok(json!({"token": "jwt-token"})));

        assert_eq!(login(&repo, credentials()).await, Ok("jwt-token".to_string()));
    }

    #[actix_web::test]
    async fn rejected_credentials_are_a_form_error() {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "POST /auth/login")
            .times(1)
            .returning(|_| Err(RepositoryError::Unauthorized));

        assert_eq!(
            login(&repo, credentials()).await,
            Err(ServiceError::Form(INVALID_CREDENTIALS.to_string()))
        );
    }

    #[actix_web::test]
    async fn blank_password_issues_no_request() {
        let mut repo = MockTransport::new();
        repo.expect_send().times(0);

        let form = LoginForm {
            password: String::new(),
            ..credentials()
        };
        assert!(login(&repo, form).await.is_err());
    }
}
