use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::blog::{BLOG_CATEGORIES, Blog};
use crate::forms::{AdminForm, FieldKind, FieldSpec, not_blank, optional_url};

/// Blog article draft.
///
/// `author` is not editable; it travels with the payload so the backend
/// keeps attributing posts to the admin account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogForm {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub excerpt: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[validate(custom(function = "not_blank"))]
    pub author_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    #[validate(custom(function = "optional_url"))]
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub is_active: bool,
}

fn default_author() -> String {
    "admin".to_string()
}

impl Default for BlogForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            author: default_author(),
            author_name: "Admin User".to_string(),
            category: BLOG_CATEGORIES[0].to_string(),
            image_url: String::new(),
            featured: false,
            published: false,
            is_active: true,
        }
    }
}

impl AdminForm for BlogForm {
    type Entity = Blog;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("excerpt", "Excerpt", FieldKind::TextArea { rows: 3 }).required(),
        FieldSpec::new("content", "Content", FieldKind::TextArea { rows: 10 }).required(),
        FieldSpec::new("authorName", "Author", FieldKind::Text).required(),
        FieldSpec::new(
            "category",
            "Category",
            FieldKind::Select {
                options: &BLOG_CATEGORIES,
            },
        ),
        FieldSpec::new("imageUrl", "Image URL", FieldKind::Url),
        FieldSpec::new("featured", "Featured", FieldKind::Checkbox),
        FieldSpec::new("published", "Published", FieldKind::Checkbox),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    fn from_entity(blog: &Blog) -> Self {
        let author = if blog.author.is_empty() {
            default_author()
        } else {
            blog.author.clone()
        };
        Self {
            title: blog.title.clone(),
            excerpt: blog.excerpt.clone(),
            content: blog.content.clone(),
            author,
            author_name: blog.author_name.clone(),
            category: blog.category.clone(),
            image_url: blog.image_url.clone(),
            featured: blog.featured,
            published: blog.published,
            is_active: blog.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode_form;

    #[test]
    fn submitted_form_keeps_hidden_author() {
        let form: BlogForm = decode_form(
            b"title=Hi&excerpt=Short&content=Long&authorName=Ann&category=Design&published=true",
        )
        .unwrap();
        assert_eq!(form.author, "admin");
        assert!(form.published);
        assert!(!form.featured);
        assert!(form.validate().is_ok());

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["authorName"], "Ann");
        assert_eq!(json["isActive"], false);
    }
}
