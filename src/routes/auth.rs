use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::LoginForm;
use crate::middleware::LOGIN_URL;
use crate::models::auth::AdminToken;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::auth::login;

const DASHBOARD_URL: &str = "/admin/dashboard";

#[get("/login")]
pub async fn show_login(
    token: Option<AdminToken>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if token.is_some() {
        return redirect(DASHBOARD_URL);
    }

    let context = base_context(&flash_messages, "login", &server_config.brand, None);
    render_template(&tera, "admin/login.html", &context)
}

#[post("/login")]
pub async fn submit_login(
    req: HttpRequest,
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let token = match login(repo.get_ref(), form).await {
        Ok(token) => token,
        Err(err) => {
            FlashMessage::error(err.to_string()).send();
            return redirect(LOGIN_URL);
        }
    };

    if let Err(e) = Identity::login(&req.extensions(), token) {
        log::error!("Failed to store admin session: {e}");
        FlashMessage::error("Login failed").send();
        return redirect(LOGIN_URL);
    }

    redirect(DASHBOARD_URL)
}

#[post("/logout")]
pub async fn logout(user: Option<Identity>) -> impl Responder {
    if let Some(user) = user {
        user.logout();
    }
    redirect(LOGIN_URL)
}
