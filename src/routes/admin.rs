//! Generic admin pages, registered once per [`AdminResource`].

use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::EntityId;
use crate::dto::admin::{AdminListQuery, DeleteOutcome, FormRequest};
use crate::forms::{DeleteForm, Draft, decode_form};
use crate::models::auth::AdminToken;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::resources::{
    AdminResource, Blogs, CaseStudies, Companies, Heroes, JourneyEntries, Resource, Services,
    Testimonials,
};
use crate::routes::{admin_failure, admin_repo, base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::admin::{
    delete_resource, load_dashboard, load_delete_confirmation, load_resource_page, save_resource,
};
use crate::services::home::HomePageCache;

fn list_url<R: AdminResource>() -> String {
    format!("/admin/{}", R::SLUG)
}

#[get("")]
pub async fn admin_root() -> impl Responder {
    redirect("/admin/dashboard")
}

#[get("/dashboard")]
pub async fn show_dashboard(
    req: HttpRequest,
    token: AdminToken,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let dashboard = match load_dashboard(&admin_repo(&repo, &token)).await {
        Ok(dashboard) => dashboard,
        Err(err) => return admin_failure(&req, err, "/"),
    };

    let mut context = base_context(&flash_messages, "dashboard", &server_config.brand, None);
    context.insert("dashboard", &dashboard);
    render_template(&tera, "admin/dashboard.html", &context)
}

#[allow(clippy::too_many_arguments)]
async fn render_resource_page<R: AdminResource>(
    req: &HttpRequest,
    token: &AdminToken,
    repo: &web::Data<HttpRepository>,
    request: FormRequest<R::Form>,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    tera: &Tera,
    error: Option<&str>,
) -> HttpResponse {
    let page = match load_resource_page::<R, _>(&admin_repo(repo, token), request).await {
        Ok(page) => page,
        Err(err) => return admin_failure(req, err, "/admin/dashboard"),
    };

    let notice = error.or(page.notice.as_deref());
    let mut context = base_context(flash_messages, R::SLUG, &server_config.brand, notice);
    context.insert("page", &page);
    context.insert("list_url", &list_url::<R>());
    render_template(tera, "admin/resource.html", &context)
}

async fn show_resource<R: AdminResource + 'static>(
    req: HttpRequest,
    token: AdminToken,
    query: web::Query<AdminListQuery>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    render_resource_page::<R>(
        &req,
        &token,
        &repo,
        FormRequest::from(&*query),
        &flash_messages,
        &server_config,
        &tera,
        None,
    )
    .await
}

#[allow(clippy::too_many_arguments)]
async fn save<R: AdminResource>(
    req: HttpRequest,
    token: AdminToken,
    id: Option<String>,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    cache: web::Data<HomePageCache>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let list_url = list_url::<R>();

    let form = match decode_form::<R::Form>(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to decode {} form: {err}", R::SLUG);
            FlashMessage::error("Please fill in all required fields").send();
            return redirect(&list_url);
        }
    };

    let result = save_resource::<R, _>(&admin_repo(&repo, &token), id.as_deref(), form.clone()).await;
    match result {
        Ok(message) => {
            cache.invalidate().await;
            FlashMessage::success(message).send();
            redirect(&list_url)
        }
        Err(ServiceError::Form(message)) => {
            let draft = Draft {
                values: form,
                editing: id.and_then(|id| EntityId::new(id).ok()),
            };
            render_resource_page::<R>(
                &req,
                &token,
                &repo,
                FormRequest::Resubmit(draft),
                &flash_messages,
                &server_config,
                &tera,
                Some(&message),
            )
            .await
        }
        Err(err) => admin_failure(&req, err, &list_url),
    }
}

#[allow(clippy::too_many_arguments)]
async fn create_resource<R: AdminResource + 'static>(
    req: HttpRequest,
    token: AdminToken,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    cache: web::Data<HomePageCache>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    save::<R>(
        req,
        token,
        None,
        body,
        repo,
        cache,
        flash_messages,
        server_config,
        tera,
    )
    .await
}

#[allow(clippy::too_many_arguments)]
async fn update_resource<R: AdminResource + 'static>(
    req: HttpRequest,
    token: AdminToken,
    id: web::Path<String>,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    cache: web::Data<HomePageCache>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    save::<R>(
        req,
        token,
        Some(id.into_inner()),
        body,
        repo,
        cache,
        flash_messages,
        server_config,
        tera,
    )
    .await
}

/// Renders the confirmation step shared by every admin collection.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn render_delete_confirmation<R: Resource>(
    req: &HttpRequest,
    token: &AdminToken,
    id: &str,
    list_url: &str,
    title: &'static str,
    current_page: &str,
    repo: &web::Data<HttpRepository>,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    let repo = admin_repo(repo, token);
    let confirm = match load_delete_confirmation::<R, _>(&repo, id, list_url, title).await {
        Ok(confirm) => confirm,
        Err(err) => return admin_failure(req, err, list_url),
    };

    let mut context = base_context(flash_messages, current_page, &server_config.brand, None);
    context.insert("confirm", &confirm);
    render_template(tera, "admin/confirm_delete.html", &context)
}

/// Deletes after confirmation; a declined confirmation sends nothing.
pub(crate) async fn perform_delete<R: Resource>(
    req: &HttpRequest,
    token: &AdminToken,
    id: &str,
    form: &DeleteForm,
    list_url: &str,
    repo: &web::Data<HttpRepository>,
) -> HttpResponse {
    let repo = admin_repo(repo, token);
    match delete_resource::<R, _>(&repo, id, form.confirmed()).await {
        Ok(DeleteOutcome::Deleted(message)) => {
            FlashMessage::success(message).send();
            redirect(list_url)
        }
        Ok(DeleteOutcome::Cancelled) => redirect(list_url),
        Err(err) => admin_failure(req, err, list_url),
    }
}

async fn confirm_delete<R: AdminResource + 'static>(
    req: HttpRequest,
    token: AdminToken,
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    render_delete_confirmation::<R>(
        &req,
        &token,
        &id,
        &list_url::<R>(),
        R::TITLE,
        R::SLUG,
        &repo,
        &flash_messages,
        &server_config,
        &tera,
    )
    .await
}

async fn delete_record<R: AdminResource + 'static>(
    req: HttpRequest,
    token: AdminToken,
    id: web::Path<String>,
    web::Form(form): web::Form<DeleteForm>,
    repo: web::Data<HttpRepository>,
    cache: web::Data<HomePageCache>,
) -> HttpResponse {
    let response = perform_delete::<R>(&req, &token, &id, &form, &list_url::<R>(), &repo).await;
    if form.confirmed() {
        cache.invalidate().await;
    }
    response
}

/// Registers list, create, update and delete pages of `R` under `/{SLUG}`.
pub fn configure_resource<R: AdminResource + 'static>(cfg: &mut web::ServiceConfig) {
    let base = format!("/{}", R::SLUG);
    cfg.service(
        web::resource(base.as_str())
            .route(web::get().to(show_resource::<R>))
            .route(web::post().to(create_resource::<R>)),
    )
    .service(web::resource(format!("{base}/{{id}}")).route(web::post().to(update_resource::<R>)))
    .service(
        web::resource(format!("{base}/{{id}}/delete"))
            .route(web::get().to(confirm_delete::<R>))
            .route(web::post().to(delete_record::<R>)),
    );
}

/// Every schema-driven admin collection.
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_resource::<Heroes>(cfg);
    configure_resource::<Services>(cfg);
    configure_resource::<Testimonials>(cfg);
    configure_resource::<Companies>(cfg);
    configure_resource::<CaseStudies>(cfg);
    configure_resource::<JourneyEntries>(cfg);
    configure_resource::<Blogs>(cfg);
}
