use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::DeleteForm;
use crate::forms::contact::ContactStatusForm;
use crate::models::auth::AdminToken;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::resources::Contacts;
use crate::routes::admin::{perform_delete, render_delete_confirmation};
use crate::routes::{admin_failure, admin_repo, base_context, redirect, render_template};
use crate::services::contacts::{load_contacts, update_status};

const CONTACTS_URL: &str = "/admin/contacts";

#[get("/contacts")]
pub async fn show_contacts(
    req: HttpRequest,
    token: AdminToken,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match load_contacts(&admin_repo(&repo, &token)).await {
        Ok(page) => page,
        Err(err) => return admin_failure(&req, err, "/admin/dashboard"),
    };

    let mut context = base_context(
        &flash_messages,
        "contacts",
        &server_config.brand,
        page.notice.as_deref(),
    );
    context.insert("page", &page);
    render_template(&tera, "admin/contacts.html", &context)
}

#[post("/contacts/{id}/status")]
pub async fn save_contact_status(
    req: HttpRequest,
    token: AdminToken,
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<ContactStatusForm>,
) -> impl Responder {
    match update_status(&admin_repo(&repo, &token), &id, &form).await {
        Ok(message) => {
            FlashMessage::success(message).send();
            redirect(CONTACTS_URL)
        }
        Err(err) => admin_failure(&req, err, CONTACTS_URL),
    }
}

#[get("/contacts/{id}/delete")]
pub async fn confirm_contact_delete(
    req: HttpRequest,
    token: AdminToken,
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_delete_confirmation::<Contacts>(
        &req,
        &token,
        &id,
        CONTACTS_URL,
        "Contacts",
        "contacts",
        &repo,
        &flash_messages,
        &server_config,
        &tera,
    )
    .await
}

#[post("/contacts/{id}/delete")]
pub async fn delete_contact(
    req: HttpRequest,
    token: AdminToken,
    id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<DeleteForm>,
) -> impl Responder {
    perform_delete::<Contacts>(&req, &token, &id, &form, CONTACTS_URL, &repo).await
}
