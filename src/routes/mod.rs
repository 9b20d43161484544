//! HTTP handlers and the helpers they share.

use actix_identity::IdentityExt;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::middleware::LOGIN_URL;
use crate::models::auth::AdminToken;
use crate::models::config::BrandConfig;
use crate::repository::HttpRepository;
use crate::services::ServiceError;
use crate::services::chrome::load_footer;

pub mod admin;
pub mod auth;
pub mod contacts;
pub mod footer;
pub mod public;
pub mod seo;

/// Maps a flash message level to the CSS class of the alert.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Flash messages of the incoming request paired with their alert class.
pub fn alerts(flash_messages: &IncomingFlashMessages) -> Vec<(String, &'static str)> {
    flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect()
}

/// Context every page starts from. `notice` is shown as an error alert
/// next to the flashed ones.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    brand: &BrandConfig,
    notice: Option<&str>,
) -> Context {
    let mut alerts = alerts(flash_messages);
    if let Some(notice) = notice {
        alerts.push((notice.to_string(), alert_level_to_str(&Level::Error)));
    }

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("brand", brand);
    context
}

/// [`base_context`] plus the site footer for public pages.
pub async fn public_context(
    repo: &HttpRepository,
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    brand: &BrandConfig,
) -> Context {
    let mut context = base_context(flash_messages, current_page, brand, None);
    context.insert("footer", &load_footer(repo, brand).await);
    context
}

/// Client for admin requests, authorized with the signed-in admin's token.
pub fn admin_repo(repo: &web::Data<HttpRepository>, token: &AdminToken) -> HttpRepository {
    repo.authorized(token.as_str())
}

/// Forgets the stored token and sends the admin back to the login form.
pub fn sign_out(req: &HttpRequest) -> HttpResponse {
    if let Ok(identity) = req.get_identity() {
        identity.logout();
    }
    FlashMessage::warning("Your session has expired. Please sign in again.").send();
    redirect(LOGIN_URL)
}

/// Flashes a failed admin operation and redirects to `back`.
pub fn admin_failure(req: &HttpRequest, err: ServiceError, back: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => sign_out(req),
        ServiceError::NotFound => {
            FlashMessage::error("The requested item no longer exists.").send();
            redirect(back)
        }
        err => {
            FlashMessage::error(err.to_string()).send();
            redirect(back)
        }
    }
}
