use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join4;
use moka::future::Cache;

use crate::domain::hero::HeroContent;
use crate::domain::service::Service;
use crate::dto::home::HomePageData;
use crate::repository::{ContentReader, ResourceReader};
use crate::resources::{Companies, Services, Testimonials};

/// Loads the four home page sections concurrently.
///
/// Never fails: a missing hero or service list is replaced by built-in
/// defaults, missing testimonials and companies render as empty sections.
pub async fn load_home_page<R>(repo: &R) -> HomePageData
where
    R: ContentReader + ResourceReader + ?Sized,
{
    let (hero, services, testimonials, companies) = join4(
        repo.active_hero(),
        repo.list_active::<Services>(),
        repo.list_active::<Testimonials>(),
        repo.list_active::<Companies>(),
    )
    .await;

    let mut complete = true;

    let hero = match hero {
        Ok(Some(hero)) => HeroContent::from(hero),
        Ok(None) => HeroContent::default(),
        Err(err) => {
            log::warn!("Using default hero: {err}");
            complete = false;
            HeroContent::default()
        }
    };

    let services = match services {
        Ok(services) if !services.is_empty() => services,
        Ok(_) => Service::defaults(),
        Err(err) => {
            log::warn!("Using default services: {err}");
            complete = false;
            Service::defaults()
        }
    };

    let testimonials = testimonials.unwrap_or_else(|err| {
        log::warn!("Failed to load testimonials: {err}");
        complete = false;
        Vec::new()
    });

    let companies = companies.unwrap_or_else(|err| {
        log::warn!("Failed to load companies: {err}");
        complete = false;
        Vec::new()
    });

    HomePageData {
        hero,
        services,
        testimonials,
        companies,
        complete,
    }
}

/// Home page data shared by all visitors for the revalidation window.
#[derive(Clone)]
pub struct HomePageCache {
    inner: Cache<(), Arc<HomePageData>>,
}

impl HomePageCache {
    pub fn new(time_to_live: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(1)
                .time_to_live(time_to_live)
                .build(),
        }
    }

    /// Serves the cached page or loads a fresh one. A page built after a
    /// failed fetch is not cached so the next visitor retries the backend;
    /// content that is simply not configured yet is cached like any other.
    pub async fn get_or_load<R>(&self, repo: &R) -> Arc<HomePageData>
    where
        R: ContentReader + ResourceReader + ?Sized,
    {
        if let Some(page) = self.inner.get(&()).await {
            return page;
        }

        let page = Arc::new(load_home_page(repo).await);
        if page.complete {
            self.inner.insert((), page.clone()).await;
        }
        page
    }

    pub async fn invalidate(&self) {
        self.inner.invalidate(&()).await;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockTransport, call};

    fn populated(times: usize) -> MockTransport {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .withf(|req| call(req) == "GET /hero/active")
            .times(times)
            .returning(|_| {
                Ok(json!({"_id": "h1", "headline": "Ship faster", "subheadline": "With us", "ctaText": "Talk", "isActive": true}))
            });
        repo.expect_send()
            .withf(|req| call(req) == "GET /services/active")
            .times(times)
            .returning(|_| Ok(json!([{"_id": "s1", "title": "Audits", "slug": "audits"}])));
        repo.expect_send()
            .withf(|req| call(req) == "GET /testimonials/active")
            .times(times)
            .returning(|_| Ok(json!([{"_id": "t1", "quote": "Great", "authorName": "Ann"}])));
        repo.expect_send()
            .withf(|req| call(req) == "GET /companies/active")
            .times(times)
            .returning(|_| {
                Ok(json!([{"_id": "c1", "name": "Acme", "logo": "https://acme.test/logo.png"}]))
            });
        repo
    }

    fn offline(times: usize) -> MockTransport {
        let mut repo = MockTransport::new();
        repo.expect_send()
            .times(times)
            .returning(|_| Err(RepositoryError::Network("connection refused".into())));
        repo
    }

    #[actix_web::test]
    async fn unreachable_backend_renders_defaults() {
        let page = load_home_page(&offline(4)).await;
        assert_eq!(page.hero, HeroContent::default());
        assert_eq!(page.services, Service::defaults());
        assert!(page.testimonials.is_empty());
        assert!(page.companies.is_empty());
        assert!(!page.complete);
    }

    #[actix_web::test]
    async fn backend_content_replaces_defaults() {
        let page = load_home_page(&populated(1)).await;
        assert_eq!(page.hero.headline, "Ship faster");
        assert_eq!(page.services.len(), 1);
        assert_eq!(page.services[0].slug, "audits");
        assert_eq!(page.companies[0].logo_url, "https://acme.test/logo.png");
        assert!(page.complete);
    }

    #[actix_web::test]
    async fn failed_loads_are_not_cached() {
        let cache = HomePageCache::new(Duration::from_secs(300));
        let repo = offline(8);
        cache.get_or_load(&repo).await;
        cache.get_or_load(&repo).await;
    }

    #[actix_web::test]
    async fn unconfigured_site_is_cached_with_defaults() {
        let cache = HomePageCache::new(Duration::from_secs(300));
        let mut repo = MockTransport::new();
        repo.expect_send().times(4).returning(|_| Ok(Value::Null));

        let first = cache.get_or_load(&repo).await;
        let second = cache.get_or_load(&repo).await;
        assert!(first.complete);
        assert_eq!(second.hero, HeroContent::default());
        assert_eq!(second.services, Service::defaults());
    }

    #[actix_web::test]
    async fn cache_serves_until_invalidated() {
        let cache = HomePageCache::new(Duration::from_secs(300));
        let repo = populated(2);

        cache.get_or_load(&repo).await;
        let page = cache.get_or_load(&repo).await;
        assert_eq!(page.hero.headline, "Ship faster");

        cache.invalidate().await;
        cache.get_or_load(&repo).await;
    }
}
