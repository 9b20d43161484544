use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, null_as_default};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub facebook: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub twitter: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

impl FooterLink {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Singleton record backing the site footer and the contact details.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_links: Vec<FooterLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_links: Vec<FooterLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub copyright_text: String,
}

/// Footer as rendered in the page chrome.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub company_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub social_links: SocialLinks,
    pub company_links: Vec<FooterLink>,
    pub service_links: Vec<FooterLink>,
    pub copyright_text: String,
}

pub fn default_company_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("About Us", "/about"),
        FooterLink::new("Our Journey", "/our-journey"),
        FooterLink::new("Our Work", "/our-work"),
    ]
}

pub fn default_service_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Custom Software", "/services"),
        FooterLink::new("Web Development", "/services"),
        FooterLink::new("Cloud Integration", "/services"),
    ]
}
