use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::service::Service;
use crate::domain::types::Slug;
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank, optional_url};

/// Service offering draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "slug"))]
    pub slug: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub icon_url: String,
    #[serde(default)]
    pub is_active: bool,
}

fn slug(value: &str) -> Result<(), validator::ValidationError> {
    Slug::new(value)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("slug"))
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            icon: String::new(),
            icon_url: String::new(),
            is_active: true,
        }
    }
}

impl AdminForm for ServiceForm {
    type Entity = Service;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("slug", "Slug", FieldKind::Text).required(),
        FieldSpec::new("description", "Description", FieldKind::TextArea { rows: 4 }).required(),
        FieldSpec::new("icon", "Icon", FieldKind::Text),
        FieldSpec::new("iconUrl", "Icon URL", FieldKind::Url),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            slug: service.slug.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
            icon_url: service.icon_url.clone(),
            is_active: service.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_must_be_kebab_case() {
        let mut form = ServiceForm {
            title: "Cloud".into(),
            slug: "Cloud Stuff".into(),
            description: "Migrations".into(),
            ..ServiceForm::default()
        };
        assert!(form.validate().is_err());
        form.slug = "cloud-stuff".into();
        assert!(form.validate().is_ok());
    }
}
