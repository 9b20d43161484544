use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::case_study::{CASE_STUDY_CATEGORIES, CASE_STUDY_INDUSTRIES, CaseStudy};
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank, optional_url};

/// Portfolio entry draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub image_url: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for CaseStudyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            content: String::new(),
            image_url: String::new(),
            client_name: String::new(),
            category: String::new(),
            industry: String::new(),
            featured: false,
            is_active: true,
        }
    }
}

impl AdminForm for CaseStudyForm {
    type Entity = CaseStudy;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("slug", "Slug", FieldKind::Text),
        FieldSpec::new("description", "Description", FieldKind::TextArea { rows: 3 }).required(),
        FieldSpec::new("content", "Content", FieldKind::TextArea { rows: 8 }),
        FieldSpec::new("imageUrl", "Image URL", FieldKind::Url),
        FieldSpec::new("clientName", "Client", FieldKind::Text),
        FieldSpec::new(
            "category",
            "Category",
            FieldKind::Select {
                options: &CASE_STUDY_CATEGORIES,
            },
        ),
        FieldSpec::new(
            "industry",
            "Industry",
            FieldKind::Select {
                options: &CASE_STUDY_INDUSTRIES,
            },
        ),
        FieldSpec::new("featured", "Featured", FieldKind::Checkbox),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(case: &CaseStudy) -> Self {
        Self {
            title: case.title.clone(),
            slug: case.slug.clone(),
            description: case.description.clone(),
            content: case.content.clone(),
            image_url: case.image_url.clone(),
            client_name: case.client_name.clone(),
            category: case.category.clone(),
            industry: case.industry.clone(),
            featured: case.featured,
            is_active: case.is_active,
        }
    }
}
