use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::hero::Hero;
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank};

/// Hero banner draft.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HeroForm {
    #[validate(custom(function = "not_blank"))]
    pub headline: String,
    #[validate(custom(function = "not_blank"))]
    pub subheadline: String,
    #[validate(custom(function = "not_blank"))]
    pub cta_text: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for HeroForm {
    fn default() -> Self {
        Self {
            headline: String::new(),
            subheadline: String::new(),
            cta_text: "Get Started".to_string(),
            is_active: true,
        }
    }
}

impl AdminForm for HeroForm {
    type Entity = Hero;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("headline", "Headline", FieldKind::Text).required(),
        FieldSpec::new("subheadline", "Subheadline", FieldKind::TextArea { rows: 3 }).required(),
        FieldSpec::new("ctaText", "Button text", FieldKind::Text).required(),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(hero: &Hero) -> Self {
        Self {
            headline: hero.headline.clone(),
            subheadline: hero.subheadline.clone(),
            cta_text: hero.cta_text.clone(),
            is_active: hero.is_active,
        }
    }
}
