//! Loaders for the public content pages.
//!
//! Listing failures degrade to empty-state pages; only a missing service
//! detail is reported to the caller.

use chrono::{DateTime, Utc};

use crate::domain::blog::{self, Blog};
use crate::domain::case_study::{
    self, CASE_STUDY_CATEGORIES, CASE_STUDY_INDUSTRIES, CaseStudy,
};
use crate::domain::page::PageResult;
use crate::domain::service::ServiceTheme;
use crate::domain::types::{Slug, sanitize_html};
use crate::dto::public::{
    BlogCard, BlogPageData, BlogQuery, CaseStudiesPageData, CaseStudyCard, JourneyPageData,
    OurWorkPageData, OurWorkQuery, ServiceDetailData, ServicesPageData,
};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{BlogListQuery, CaseStudyListQuery, ContentReader, ResourceReader};
use crate::resources::{CaseStudies, JourneyEntries, Services};
use crate::services::{ServiceError, ServiceResult};

/// Label of the filter option that disables a filter.
pub const ALL: &str = "All";

const RELATED_SERVICES: usize = 3;

/// Trims a filter value; blank and "All" mean no filter.
fn filter_value(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != ALL)
        .map(str::to_string)
}

fn filter_query(params: &[(&str, &Option<String>)]) -> String {
    let pairs: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (*key, value)))
        .collect();
    serde_html_form::to_string(&pairs).unwrap_or_default()
}

/// A page beyond the last one is served as the last page.
fn past_last_page(page: usize, total_pages: usize) -> bool {
    total_pages > 0 && page > total_pages
}

pub(crate) fn format_date(date: Option<DateTime<Utc>>) -> Option<String> {
    date.map(|date| date.format("%b %-d, %Y").to_string())
}

fn case_study_card(study: CaseStudy) -> CaseStudyCard {
    let image = if study.image_url.trim().is_empty() {
        case_study::placeholder_image(&study.industry).to_string()
    } else {
        study.image_url.clone()
    };
    CaseStudyCard {
        content_html: sanitize_html(&study.content),
        image,
        study,
    }
}

fn blog_card(post: Blog) -> BlogCard {
    let image = if post.image_url.trim().is_empty() {
        blog::placeholder_image(&post.category).to_string()
    } else {
        post.image_url.clone()
    };
    BlogCard {
        published_on: format_date(post.published_at),
        image,
        post,
    }
}

pub async fn load_services_page<R>(repo: &R) -> ServicesPageData
where
    R: ResourceReader + ?Sized,
{
    let services = repo.list_active::<Services>().await.unwrap_or_else(|err| {
        log::error!("Failed to load services: {err}");
        Vec::new()
    });
    ServicesPageData { services }
}

/// Loads a service by slug together with up to three other active services.
pub async fn load_service_detail<R>(repo: &R, slug: &str) -> ServiceResult<ServiceDetailData>
where
    R: ContentReader + ResourceReader + ?Sized,
{
    let slug = Slug::new(slug)?;

    let service = repo
        .service_by_slug(&slug)
        .await
        .map_err(|err| {
            log::error!("Failed to load service {slug}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)?;

    let related = match repo.list_active::<Services>().await {
        Ok(services) => services
            .into_iter()
            .filter(|other| other.slug != service.slug)
            .take(RELATED_SERVICES)
            .collect(),
        Err(err) => {
            log::warn!("Failed to load related services: {err}");
            Vec::new()
        }
    };

    Ok(ServiceDetailData {
        theme: ServiceTheme::for_title(&service.title),
        service,
        related,
    })
}

pub async fn load_case_studies_page<R>(repo: &R) -> CaseStudiesPageData
where
    R: ResourceReader + ?Sized,
{
    let case_studies = repo
        .list_active::<CaseStudies>()
        .await
        .unwrap_or_else(|err| {
            log::error!("Failed to load case studies: {err}");
            Vec::new()
        });
    CaseStudiesPageData {
        case_studies: case_studies.into_iter().map(case_study_card).collect(),
    }
}

/// Loads one page of case studies matching the category and industry filters.
pub async fn load_our_work_page<R>(repo: &R, query: OurWorkQuery) -> OurWorkPageData
where
    R: ContentReader + ?Sized,
{
    let mut page = query.page.unwrap_or(1).max(1);
    let category = filter_value(query.category.as_deref());
    let industry = filter_value(query.industry.as_deref());

    let mut list_query = CaseStudyListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(category) = &category {
        list_query = list_query.category(category);
    }
    if let Some(industry) = &industry {
        list_query = list_query.industry(industry);
    }

    let load = |list_query: CaseStudyListQuery| async move {
        repo.filtered_case_studies(&list_query)
            .await
            .unwrap_or_else(|err| {
                log::error!("Failed to load case studies: {err}");
                PageResult::empty(DEFAULT_ITEMS_PER_PAGE)
            })
    };

    let mut result = load(list_query.clone()).await;
    let last_page = result.page_count(DEFAULT_ITEMS_PER_PAGE);
    if past_last_page(page, last_page) {
        page = last_page;
        result = load(list_query.paginate(page, DEFAULT_ITEMS_PER_PAGE)).await;
    }

    let total_pages = result.page_count(DEFAULT_ITEMS_PER_PAGE);
    let total = result.total;
    let cards = result.data.into_iter().map(case_study_card).collect();

    OurWorkPageData {
        case_studies: Paginated::new(cards, page, total_pages),
        total,
        categories: std::iter::once(ALL).chain(CASE_STUDY_CATEGORIES).collect(),
        industries: std::iter::once(ALL).chain(CASE_STUDY_INDUSTRIES).collect(),
        filter_query: filter_query(&[("category", &category), ("industry", &industry)]),
        selected_category: category.unwrap_or_else(|| ALL.to_string()),
        selected_industry: industry.unwrap_or_else(|| ALL.to_string()),
    }
}

pub async fn load_journey_page<R>(repo: &R) -> JourneyPageData
where
    R: ResourceReader + ?Sized,
{
    let entries = repo
        .list_active::<JourneyEntries>()
        .await
        .unwrap_or_else(|err| {
            log::error!("Failed to load journey: {err}");
            Vec::new()
        });
    JourneyPageData { entries }
}

/// Loads the featured article, the category list and one filtered page of posts.
pub async fn load_blog_page<R>(repo: &R, query: BlogQuery) -> BlogPageData
where
    R: ContentReader + ?Sized,
{
    let mut page = query.page.unwrap_or(1).max(1);
    let category = filter_value(query.category.as_deref());
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(str::to_string);

    let mut list_query = BlogListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(category) = &category {
        list_query = list_query.category(category);
    }
    if let Some(search) = &search {
        list_query = list_query.search(search);
    }

    let featured = repo.featured_blog().await.unwrap_or_else(|err| {
        log::warn!("No featured blog: {err}");
        None
    });

    let categories = repo.blog_categories().await.unwrap_or_else(|err| {
        log::error!("Failed to load blog categories: {err}");
        Vec::new()
    });

    let load = |list_query: BlogListQuery| async move {
        repo.paginated_blogs(&list_query)
            .await
            .unwrap_or_else(|err| {
                log::error!("Failed to load blogs: {err}");
                PageResult::empty(DEFAULT_ITEMS_PER_PAGE)
            })
    };

    let mut result = load(list_query.clone()).await;
    let last_page = result.page_count(DEFAULT_ITEMS_PER_PAGE);
    if past_last_page(page, last_page) {
        page = last_page;
        result = load(list_query.paginate(page, DEFAULT_ITEMS_PER_PAGE)).await;
    }

    let total_pages = result.page_count(DEFAULT_ITEMS_PER_PAGE);
    let total = result.total;
    let cards = result.data.into_iter().map(blog_card).collect();

    BlogPageData {
        featured: featured.map(blog_card),
        posts: Paginated::new(cards, page, total_pages),
        total,
        categories: std::iter::once(ALL.to_string())
            .chain(categories.into_iter().filter(|category| category != ALL))
            .collect(),
        filter_query: filter_query(&[("category", &category), ("search", &search)]),
        selected_category: category.unwrap_or_else(|| ALL.to_string()),
        search: search.unwrap_or_default(),
    }
}
