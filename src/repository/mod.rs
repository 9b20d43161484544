//! Access to the external content backend.
//!
//! Every backend call goes through [`ApiTransport::send`]. The reader and
//! writer traits below are implemented once for any transport, so services
//! only name the capability they need.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::blog::Blog;
use crate::domain::case_study::CaseStudy;
use crate::domain::footer::{Footer, FooterContent};
use crate::domain::hero::Hero;
use crate::domain::page::PageResult;
use crate::domain::service::Service;
use crate::domain::types::{EntityId, Slug};
use crate::forms::auth::LoginForm;
use crate::forms::contact::ContactForm;
use crate::forms::newsletter::NewsletterForm;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::resources::Resource;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A single backend call relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn query(mut self, params: Vec<(String, String)>) -> Self {
        self.query = params;
        self
    }

    pub fn json<P: Serialize + ?Sized>(mut self, payload: &P) -> RepositoryResult<Self> {
        self.body = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Path with the url-encoded query string appended.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        match serde_html_form::to_string(&self.query) {
            Ok(query) => format!("{}?{}", self.path, query),
            Err(_) => self.path.clone(),
        }
    }
}

/// Sends requests to the backend and unwraps the `{ success, data, message }`
/// envelope. `Ok(Value::Null)` means the backend has nothing configured.
#[allow(async_fn_in_trait)]
pub trait ApiTransport {
    async fn send(&self, request: ApiRequest) -> RepositoryResult<Value>;
}

fn decode<T: DeserializeOwned>(data: Value) -> RepositoryResult<T> {
    Ok(serde_json::from_value(data)?)
}

fn decode_optional<T: DeserializeOwned>(data: Value) -> RepositoryResult<Option<T>> {
    match data {
        Value::Null => Ok(None),
        data => decode(data).map(Some),
    }
}

/// Records that fail to decode are logged and skipped.
fn decode_list<T: DeserializeOwned>(data: Value) -> RepositoryResult<Vec<T>> {
    match data {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping malformed record: {err}");
                    None
                }
            })
            .collect()),
        data => decode(data),
    }
}

fn decode_page<T: DeserializeOwned>(data: Value, limit: usize) -> RepositoryResult<PageResult<T>> {
    if data.is_null() {
        return Ok(PageResult::empty(limit));
    }
    let page: PageResult<Value> = decode(data)?;
    Ok(PageResult {
        data: decode_list(Value::Array(page.data))?,
        total: page.total,
        page: page.page,
        limit: page.limit,
        total_pages: page.total_pages,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 6,
        }
    }
}

/// `GET /blog/paginated` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl BlogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.pagination.page.to_string()),
            ("limit".to_string(), self.pagination.per_page.to_string()),
        ];
        if let Some(category) = &self.category {
            params.push(("category".to_string(), category.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        params
    }
}

/// `GET /case-studies/filtered` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseStudyListQuery {
    pub category: Option<String>,
    pub industry: Option<String>,
    pub pagination: Pagination,
}

impl CaseStudyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.pagination.page.to_string()),
            ("limit".to_string(), self.pagination.per_page.to_string()),
        ];
        if let Some(category) = &self.category {
            params.push(("category".to_string(), category.clone()));
        }
        if let Some(industry) = &self.industry {
            params.push(("industry".to_string(), industry.clone()));
        }
        params
    }
}

#[allow(async_fn_in_trait)]
pub trait ResourceReader {
    async fn list<R: Resource>(&self) -> RepositoryResult<Vec<R::Entity>>;
    async fn list_active<R: Resource>(&self) -> RepositoryResult<Vec<R::Entity>>;
}

#[allow(async_fn_in_trait)]
pub trait ResourceWriter {
    async fn create<R: Resource, P: Serialize>(&self, payload: &P) -> RepositoryResult<()>;
    async fn update<R: Resource, P: Serialize>(
        &self,
        id: &EntityId,
        payload: &P,
    ) -> RepositoryResult<()>;
    async fn delete<R: Resource>(&self, id: &EntityId) -> RepositoryResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait ContentReader {
    async fn active_hero(&self) -> RepositoryResult<Option<Hero>>;
    async fn service_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Service>>;
    async fn featured_blog(&self) -> RepositoryResult<Option<Blog>>;
    async fn blog_categories(&self) -> RepositoryResult<Vec<String>>;
    async fn paginated_blogs(&self, query: &BlogListQuery) -> RepositoryResult<PageResult<Blog>>;
    async fn filtered_case_studies(
        &self,
        query: &CaseStudyListQuery,
    ) -> RepositoryResult<PageResult<CaseStudy>>;
    async fn footer(&self) -> RepositoryResult<Option<Footer>>;
}

#[allow(async_fn_in_trait)]
pub trait FooterWriter {
    /// Creates the footer when `existing` is `None`, patches it otherwise.
    async fn save_footer(
        &self,
        existing: Option<&EntityId>,
        content: &FooterContent,
    ) -> RepositoryResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait InboxWriter {
    async fn submit_contact(&self, form: &ContactForm) -> RepositoryResult<()>;
    async fn subscribe_newsletter(&self, form: &NewsletterForm) -> RepositoryResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait AuthWriter {
    /// Exchanges admin credentials for a bearer token.
    async fn login(&self, credentials: &LoginForm) -> RepositoryResult<String>;
}

impl<T: ApiTransport + ?Sized> ResourceReader for T {
    async fn list<R: Resource>(&self) -> RepositoryResult<Vec<R::Entity>> {
        decode_list(self.send(ApiRequest::get(R::PATH)).await?)
    }

    async fn list_active<R: Resource>(&self) -> RepositoryResult<Vec<R::Entity>> {
        let path = format!("{}/active", R::PATH);
        decode_list(self.send(ApiRequest::get(path)).await?)
    }
}

impl<T: ApiTransport + ?Sized> ResourceWriter for T {
    async fn create<R: Resource, P: Serialize>(&self, payload: &P) -> RepositoryResult<()> {
        let request = ApiRequest::new(Method::Post, R::PATH).json(payload)?;
        self.send(request).await.map(|_| ())
    }

    async fn update<R: Resource, P: Serialize>(
        &self,
        id: &EntityId,
        payload: &P,
    ) -> RepositoryResult<()> {
        let request = ApiRequest::new(Method::Patch, R::item_path(id)).json(payload)?;
        self.send(request).await.map(|_| ())
    }

    async fn delete<R: Resource>(&self, id: &EntityId) -> RepositoryResult<()> {
        let request = ApiRequest::new(Method::Delete, R::item_path(id));
        self.send(request).await.map(|_| ())
    }
}

impl<T: ApiTransport + ?Sized> ContentReader for T {
    async fn active_hero(&self) -> RepositoryResult<Option<Hero>> {
        decode_optional(self.send(ApiRequest::get("/hero/active")).await?)
    }

    async fn service_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Service>> {
        let path = format!("/services/slug/{slug}");
        match self.send(ApiRequest::get(path)).await {
            Ok(data) => decode_optional(data),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn featured_blog(&self) -> RepositoryResult<Option<Blog>> {
        match self.send(ApiRequest::get("/blog/featured")).await {
            Ok(data) => decode_optional(data),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn blog_categories(&self) -> RepositoryResult<Vec<String>> {
        decode_list(self.send(ApiRequest::get("/blog/categories")).await?)
    }

    async fn paginated_blogs(&self, query: &BlogListQuery) -> RepositoryResult<PageResult<Blog>> {
        let request = ApiRequest::get("/blog/paginated").query(query.params());
        decode_page(self.send(request).await?, query.pagination.per_page)
    }

    async fn filtered_case_studies(
        &self,
        query: &CaseStudyListQuery,
    ) -> RepositoryResult<PageResult<CaseStudy>> {
        let request = ApiRequest::get("/case-studies/filtered").query(query.params());
        decode_page(self.send(request).await?, query.pagination.per_page)
    }

    async fn footer(&self) -> RepositoryResult<Option<Footer>> {
        match self.send(ApiRequest::get("/footer")).await {
            Ok(data) => decode_optional(data),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl<T: ApiTransport + ?Sized> FooterWriter for T {
    async fn save_footer(
        &self,
        existing: Option<&EntityId>,
        content: &FooterContent,
    ) -> RepositoryResult<()> {
        let request = match existing {
            Some(id) => ApiRequest::new(Method::Patch, format!("/footer/{id}")),
            None => ApiRequest::new(Method::Post, "/footer"),
        };
        self.send(request.json(content)?).await.map(|_| ())
    }
}

impl<T: ApiTransport + ?Sized> InboxWriter for T {
    async fn submit_contact(&self, form: &ContactForm) -> RepositoryResult<()> {
        let request = ApiRequest::new(Method::Post, "/contact").json(form)?;
        self.send(request).await.map(|_| ())
    }

    async fn subscribe_newsletter(&self, form: &NewsletterForm) -> RepositoryResult<()> {
        let request = ApiRequest::new(Method::Post, "/newsletter/subscribe").json(form)?;
        self.send(request).await.map(|_| ())
    }
}

#[derive(serde::Deserialize)]
struct LoginData {
    token: String,
}

impl<T: ApiTransport + ?Sized> AuthWriter for T {
    async fn login(&self, credentials: &LoginForm) -> RepositoryResult<String> {
        let request = ApiRequest::new(Method::Post, "/auth/login").json(credentials)?;
        let data: LoginData = decode(self.send(request).await?)?;
        Ok(data.token)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::repository::mock::{MockTransport, call};
    use crate::resources::{Companies, Contacts, Services};

    #[test]
    fn query_string_keeps_parameter_order() {
        let query = BlogListQuery::new()
            .paginate(1, 6)
            .category("Company News")
            .search("rust");
        let request = ApiRequest::get("/blog/paginated").query(query.params());
        assert_eq!(
            request.path_and_query(),
            "/blog/paginated?page=1&limit=6&category=Company+News&search=rust"
        );
    }

    #[test]
    fn case_study_query_lists_industry_last() {
        let query = CaseStudyListQuery::new()
            .paginate(2, 6)
            .industry("FinTech")
            .category("Mobile Apps");
        let request = ApiRequest::get("/case-studies/filtered").query(query.params());
        assert_eq!(
            request.path_and_query(),
            "/case-studies/filtered?page=2&limit=6&category=Mobile+Apps&industry=FinTech"
        );
    }

    #[actix_web::test]
    async fn null_data_means_nothing_configured() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(4)
            .returning(|_| Ok(Value::Null));

        assert_eq!(transport.active_hero().await, Ok(None));
        assert_eq!(transport.footer().await, Ok(None));
        assert!(transport.list_active::<Services>().await.unwrap().is_empty());
        let page = transport
            .paginated_blogs(&BlogListQuery::new())
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.limit, 6);
    }

    #[actix_web::test]
    async fn writes_target_collection_and_item_paths() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| call(req) == "POST /companies" && req.body == Some(json!({"name": "Acme"})))
            .times(1)
            .returning(|_| Ok(Value::Null));
        transport
            .expect_send()
            .withf(|req| call(req) == "PATCH /contact/c1")
            .times(1)
            .returning(|_| Ok(Value::Null));
        transport
            .expect_send()
            .withf(|req| call(req) == "DELETE /companies/c1" && req.body.is_none())
            .times(1)
            .returning(|_| Ok(Value::Null));

        let id = EntityId::new("c1").unwrap();
        transport
            .create::<Companies, _>(&json!({"name": "Acme"}))
            .await
            .unwrap();
        transport
            .update::<Contacts, _>(&id, &json!({"status": "read", "isRead": true}))
            .await
            .unwrap();
        transport.delete::<Companies>(&id).await.unwrap();
    }

    #[actix_web::test]
    async fn footer_is_created_once_then_patched() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| call(req) == "POST /footer")
            .times(1)
            .returning(|_| Ok(Value::Null));
        transport
            .expect_send()
            .withf(|req| call(req) == "PATCH /footer/f1")
            .times(1)
            .returning(|_| Ok(Value::Null));

        let content = FooterContent::default();
        transport.save_footer(None, &content).await.unwrap();
        let id = EntityId::new("f1").unwrap();
        transport.save_footer(Some(&id), &content).await.unwrap();
    }

    #[actix_web::test]
    async fn missing_service_slug_is_not_an_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| call(req) == "GET /services/slug/missing")
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let slug = Slug::new("missing").unwrap();
        assert_eq!(transport.service_by_slug(&slug).await, Ok(None));
    }

    #[actix_web::test]
    async fn one_malformed_record_does_not_empty_the_list() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| call(req) == "GET /services/active")
            .times(1)
            .returning(|_| {
                Ok(json!([
                    {"_id": "s1", "title": "Cloud", "slug": "cloud", "description": null},
                    {"_id": "s2", "title": 42},
                ]))
            });

        let services = transport.list_active::<Services>().await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].title, "Cloud");
        assert_eq!(services[0].description, "");
    }

    #[actix_web::test]
    async fn login_returns_token() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| call(req) == "POST /auth/login")
            .times(1)
            .returning(|_| Ok(json!({"token": "abc", "user": {"email": "a@b.c"}})));

        let form = LoginForm {
            email: "a@b.c".into(),
            password: "secret".into(),
        };
        assert_eq!(transport.login(&form).await, Ok("abc".to_string()));
    }
}
