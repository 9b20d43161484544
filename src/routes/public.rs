use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use futures_util::future::join;
use tera::Tera;

use crate::dto::public::{BlogQuery, OurWorkQuery};
use crate::forms::contact::ContactForm;
use crate::forms::newsletter::NewsletterForm;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, public_context, redirect, render_template};
use crate::services::chrome::{load_contact_info, load_footer};
use crate::services::home::HomePageCache;
use crate::services::inbox::{self, CONTACT_SENT, SUBSCRIBED, contact_page};
use crate::services::{ServiceError, pages};

#[get("/")]
pub async fn show_home(
    repo: web::Data<HttpRepository>,
    cache: web::Data<HomePageCache>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let home = cache.get_or_load(repo.get_ref()).await;
    let mut context = public_context(&repo, &flash_messages, "home", &server_config.brand).await;
    context.insert("home", home.as_ref());
    render_template(&tera, "public/home.html", &context)
}

#[get("/about")]
pub async fn show_about(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = public_context(&repo, &flash_messages, "about", &server_config.brand).await;
    render_template(&tera, "public/about.html", &context)
}

#[get("/services")]
pub async fn show_services(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = pages::load_services_page(repo.get_ref()).await;
    let mut context = public_context(&repo, &flash_messages, "services", &server_config.brand).await;
    context.insert("page", &page);
    render_template(&tera, "public/services.html", &context)
}

#[get("/services/{slug}")]
pub async fn show_service(
    slug: web::Path<String>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match pages::load_service_detail(repo.get_ref(), &slug).await {
        Ok(page) => page,
        Err(ServiceError::Backend(message)) => {
            FlashMessage::error(message).send();
            return redirect("/services");
        }
        Err(_) => {
            FlashMessage::error("Service not found").send();
            return redirect("/services");
        }
    };

    let mut context = public_context(&repo, &flash_messages, "services", &server_config.brand).await;
    context.insert("page", &page);
    render_template(&tera, "public/service_detail.html", &context)
}

#[get("/our-work")]
pub async fn show_our_work(
    query: web::Query<OurWorkQuery>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = pages::load_our_work_page(repo.get_ref(), query.into_inner()).await;
    let mut context = public_context(&repo, &flash_messages, "our-work", &server_config.brand).await;
    context.insert("page", &page);
    render_template(&tera, "public/our_work.html", &context)
}

#[get("/case-studies")]
pub async fn show_case_studies(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = pages::load_case_studies_page(repo.get_ref()).await;
    let mut context =
        public_context(&repo, &flash_messages, "case-studies", &server_config.brand).await;
    context.insert("page", &page);
    render_template(&tera, "public/case_studies.html", &context)
}

#[get("/our-journey")]
pub async fn show_journey(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = pages::load_journey_page(repo.get_ref()).await;
    let mut context =
        public_context(&repo, &flash_messages, "our-journey", &server_config.brand).await;
    context.insert("page", &page);
    render_template(&tera, "public/journey.html", &context)
}

#[get("/blog")]
pub async fn show_blog(
    query: web::Query<BlogQuery>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = pages::load_blog_page(repo.get_ref(), query.into_inner()).await;
    let mut context = public_context(&repo, &flash_messages, "blog", &server_config.brand).await;
    context.insert("page", &page);
    render_template(&tera, "public/blog.html", &context)
}

#[post("/newsletter/subscribe")]
pub async fn subscribe_newsletter(
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<NewsletterForm>,
) -> impl Responder {
    match inbox::subscribe(repo.get_ref(), form).await {
        Ok(()) => FlashMessage::success(SUBSCRIBED).send(),
        Err(err) => FlashMessage::error(err.to_string()).send(),
    }
    redirect("/blog")
}

/// Renders the contact page. The footer and the contact details are fetched
/// separately so one failing does not blank the other.
async fn render_contact(
    repo: &HttpRepository,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    tera: &Tera,
    form: &ContactForm,
    error: Option<&str>,
) -> HttpResponse {
    let brand = &server_config.brand;
    let (footer, info) = join(load_footer(repo, brand), load_contact_info(repo, brand)).await;

    let mut context = base_context(flash_messages, "contact", brand, error);
    context.insert("footer", &footer);
    context.insert("page", &contact_page(info));
    context.insert("form", form);
    render_template(tera, "public/contact.html", &context)
}

#[get("/contact")]
pub async fn show_contact(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_contact(
        &repo,
        &flash_messages,
        &server_config,
        &tera,
        &ContactForm::default(),
        None,
    )
    .await
}

#[post("/contact")]
pub async fn submit_contact(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    match inbox::submit_contact(repo.get_ref(), form.clone()).await {
        Ok(()) => {
            FlashMessage::success(CONTACT_SENT).send();
            redirect("/contact")
        }
        Err(err) => {
            log::warn!("Contact request not sent: {err}");
            let message = err.to_string();
            render_contact(&repo, &flash_messages, &server_config, &tera, &form, Some(&message))
                .await
        }
    }
}
