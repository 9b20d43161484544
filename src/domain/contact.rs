use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactStatus, EntityId, null_as_default};

/// Message left through the public contact form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub full_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ContactStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Subjects offered on the contact form.
pub const CONTACT_SUBJECTS: [&str; 6] = [
    "General Inquiry",
    "Sales Inquiry",
    "Technical Support",
    "Partnership",
    "Career Opportunity",
    "Other",
];

/// Status transition sent to `PATCH /contact/:id`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactStatusChange {
    pub status: ContactStatus,
    pub is_read: bool,
}

impl From<ContactStatus> for ContactStatusChange {
    fn from(status: ContactStatus) -> Self {
        Self {
            status,
            is_read: status.marks_read(),
        }
    }
}

/// Email, phone and address shown on the contact page.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}
