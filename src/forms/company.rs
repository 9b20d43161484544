use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::company::Company;
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank, optional_url};

/// Client company draft for the logo strip.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub logo_url: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub website: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            logo_url: String::new(),
            website: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

impl AdminForm for CompanyForm {
    type Entity = Company;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text).required(),
        FieldSpec::new("logoUrl", "Logo URL", FieldKind::Url),
        FieldSpec::new("website", "Website", FieldKind::Url),
        FieldSpec::new("order", "Order", FieldKind::Number),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            logo_url: company.logo_url.clone(),
            website: company.website.clone(),
            order: company.order,
            is_active: company.is_active,
        }
    }
}
