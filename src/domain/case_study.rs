use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityId, null_as_default};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, alias = "image", deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// Portfolio categories offered as filters on the "our work" page.
pub const CASE_STUDY_CATEGORIES: [&str; 3] = ["Web Development", "Mobile Apps", "UI/UX Design"];

/// Client industries offered as filters on the "our work" page.
pub const CASE_STUDY_INDUSTRIES: [&str; 6] = [
    "FinTech",
    "E-commerce",
    "HealthTech",
    "SaaS",
    "Real Estate",
    "EdTech",
];

/// Stock picture used when a case study has no image of its own.
pub fn placeholder_image(industry: &str) -> &'static str {
    match industry {
        "FinTech" => "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        "E-commerce" => "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
        "HealthTech" => "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=800&h=600&fit=crop",
        "SaaS" => "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
        "Real Estate" => "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=600&fit=crop",
        "EdTech" => "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop",
        _ => "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=800&h=600&fit=crop",
    }
}
