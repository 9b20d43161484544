use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, null_as_default};

/// Headline block shown at the top of the home page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subheadline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cta_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// Hero content as rendered on the home page, with or without a backing record.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
}

impl From<Hero> for HeroContent {
    fn from(hero: Hero) -> Self {
        Self {
            headline: hero.headline,
            subheadline: hero.subheadline,
            cta_text: hero.cta_text,
        }
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Innovative Software Solutions for a Digital World".to_string(),
            subheadline: "We build custom software to help your business grow and succeed. \
                          Let's create something amazing together."
                .to_string(),
            cta_text: "Get Started".to_string(),
        }
    }
}
