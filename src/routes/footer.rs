use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::admin::FooterEditorData;
use crate::forms::decode_form;
use crate::forms::footer::FooterForm;
use crate::models::auth::AdminToken;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{admin_failure, admin_repo, base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::footer::{load_footer_editor, save_footer};

const FOOTER_URL: &str = "/admin/footer";

#[get("/footer")]
pub async fn show_footer_editor(
    req: HttpRequest,
    token: AdminToken,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let editor = match load_footer_editor(&admin_repo(&repo, &token)).await {
        Ok(editor) => editor,
        Err(err) => return admin_failure(&req, err, "/admin/dashboard"),
    };

    let mut context = base_context(
        &flash_messages,
        "footer",
        &server_config.brand,
        editor.notice.as_deref(),
    );
    context.insert("editor", &editor);
    render_template(&tera, "admin/footer.html", &context)
}

#[post("/footer")]
pub async fn save_footer_editor(
    req: HttpRequest,
    token: AdminToken,
    body: web::Bytes,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form: FooterForm = match decode_form(&body) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to decode footer form: {err}");
            FlashMessage::error("Please fill in all required fields").send();
            return redirect(FOOTER_URL);
        }
    };

    match save_footer(&admin_repo(&repo, &token), &form).await {
        Ok(message) => {
            FlashMessage::success(message).send();
            redirect(FOOTER_URL)
        }
        Err(ServiceError::Form(message)) => {
            let editor = FooterEditorData {
                form,
                footer_id: None,
                notice: None,
            };
            let mut context =
                base_context(&flash_messages, "footer", &server_config.brand, Some(&message));
            context.insert("editor", &editor);
            render_template(&tera, "admin/footer.html", &context)
        }
        Err(err) => admin_failure(&req, err, FOOTER_URL),
    }
}
