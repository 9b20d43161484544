use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::contact::CONTACT_SUBJECTS;
use crate::domain::types::ContactStatus;
use crate::forms::{FormError, not_blank};

fn known_subject(value: &str) -> Result<(), ValidationError> {
    if CONTACT_SUBJECTS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("subject"))
    }
}

/// Public contact request, also the body of `POST /contact`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "known_subject"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            subject: CONTACT_SUBJECTS[0].to_string(),
            message: String::new(),
        }
    }
}

/// Admin status change for a contact request.
#[derive(Debug, Deserialize)]
pub struct ContactStatusForm {
    pub status: String,
}

impl ContactStatusForm {
    pub fn status(&self) -> Result<ContactStatus, FormError> {
        self.status
            .parse()
            .map_err(|_| FormError::InvalidStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_requires_known_subject_and_valid_email() {
        let mut form = ContactForm {
            full_name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            subject: "Partnership".into(),
            message: "Let's talk".into(),
        };
        assert!(form.validate().is_ok());
        form.subject = "Spam".into();
        assert!(form.validate().is_err());
        form.subject = "Other".into();
        form.email = "jane".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn status_form_parses_known_statuses() {
        let form = ContactStatusForm {
            status: "replied".into(),
        };
        assert_eq!(form.status().unwrap(), ContactStatus::Replied);
        let form = ContactStatusForm {
            status: "lost".into(),
        };
        assert!(matches!(form.status(), Err(FormError::InvalidStatus)));
    }
}
