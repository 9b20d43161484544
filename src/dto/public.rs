//! DTOs shaped for the public content pages.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::blog::Blog;
use crate::domain::case_study::CaseStudy;
use crate::domain::contact::ContactInfo;
use crate::domain::journey::Journey;
use crate::domain::service::{Service, ServiceTheme};
use crate::pagination::Paginated;

/// Reads `?page=`; anything but a positive number is treated as absent.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|raw| raw.trim().parse().ok())
        .filter(|page: &usize| *page > 0))
}

/// Query parameters of `GET /blog`.
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Query parameters of `GET /our-work`.
#[derive(Debug, Default, Deserialize)]
pub struct OurWorkQuery {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
    pub category: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServicesPageData {
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize)]
pub struct ServiceDetailData {
    pub service: Service,
    pub theme: ServiceTheme,
    pub related: Vec<Service>,
}

/// Case study with its display image resolved and rich content sanitized.
#[derive(Debug, Serialize)]
pub struct CaseStudyCard {
    #[serde(flatten)]
    pub study: CaseStudy,
    pub image: String,
    pub content_html: String,
}

#[derive(Debug, Serialize)]
pub struct CaseStudiesPageData {
    pub case_studies: Vec<CaseStudyCard>,
}

#[derive(Debug, Serialize)]
pub struct OurWorkPageData {
    pub case_studies: Paginated<CaseStudyCard>,
    pub total: usize,
    pub categories: Vec<&'static str>,
    pub industries: Vec<&'static str>,
    pub selected_category: String,
    pub selected_industry: String,
    /// Active filters as a query string, appended to page links.
    pub filter_query: String,
}

#[derive(Debug, Serialize)]
pub struct JourneyPageData {
    pub entries: Vec<Journey>,
}

/// Blog post with display image and formatted date.
#[derive(Debug, Serialize)]
pub struct BlogCard {
    #[serde(flatten)]
    pub post: Blog,
    pub image: String,
    pub published_on: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogPageData {
    pub featured: Option<BlogCard>,
    pub posts: Paginated<BlogCard>,
    pub total: usize,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub search: String,
    pub filter_query: String,
}

#[derive(Debug, Serialize)]
pub struct ContactPageData {
    pub info: ContactInfo,
    pub subjects: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_page_falls_back_to_first_page() {
        let query: BlogQuery = serde_html_form::from_str("page=abc&category=Design").unwrap();
        assert_eq!(query.page, None);
        assert_eq!(query.category.as_deref(), Some("Design"));

        let query: OurWorkQuery = serde_html_form::from_str("page=0").unwrap();
        assert_eq!(query.page, None);

        let query: OurWorkQuery = serde_html_form::from_str("page=3&industry=FinTech").unwrap();
        assert_eq!(query.page, Some(3));
    }
}
