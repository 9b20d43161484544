use serde::{Deserialize, Serialize};
use validator::Validate;

/// Admin sign-in credentials forwarded to `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
