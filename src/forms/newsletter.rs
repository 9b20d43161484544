use serde::{Deserialize, Serialize};
use validator::Validate;

/// Newsletter sign-up, also the body of `POST /newsletter/subscribe`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewsletterForm {
    #[validate(email)]
    pub email: String,
}
