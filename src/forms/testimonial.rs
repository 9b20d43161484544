use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::testimonial::Testimonial;
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank, optional_url};

/// Testimonial draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialForm {
    #[validate(custom(function = "not_blank"))]
    pub quote: String,
    #[validate(custom(function = "not_blank"))]
    pub author_name: String,
    #[validate(custom(function = "not_blank"))]
    pub author_title: String,
    #[validate(custom(function = "not_blank"))]
    pub author_company: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub author_avatar: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for TestimonialForm {
    fn default() -> Self {
        Self {
            quote: String::new(),
            author_name: String::new(),
            author_title: String::new(),
            author_company: String::new(),
            author_avatar: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

impl AdminForm for TestimonialForm {
    type Entity = Testimonial;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("quote", "Quote", FieldKind::TextArea { rows: 4 }).required(),
        FieldSpec::new("authorName", "Author name", FieldKind::Text).required(),
        FieldSpec::new("authorTitle", "Author title", FieldKind::Text).required(),
        FieldSpec::new("authorCompany", "Author company", FieldKind::Text).required(),
        FieldSpec::new("authorAvatar", "Avatar URL", FieldKind::Url),
        FieldSpec::new("order", "Order", FieldKind::Number),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(testimonial: &Testimonial) -> Self {
        Self {
            quote: testimonial.quote.clone(),
            author_name: testimonial.author_name.clone(),
            author_title: testimonial.author_title.clone(),
            author_company: testimonial.author_company.clone(),
            author_avatar: testimonial.author_avatar.clone(),
            order: testimonial.order,
            is_active: testimonial.is_active,
        }
    }
}
