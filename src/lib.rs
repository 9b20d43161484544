#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "data")]
pub mod resources;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{build_app_data, configure_routes, run};

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::repository::HttpRepository;
    use crate::routes::admin::{self, admin_root, show_dashboard};
    use crate::routes::auth::{logout, show_login, submit_login};
    use crate::routes::contacts::{
        confirm_contact_delete, delete_contact, save_contact_status, show_contacts,
    };
    use crate::routes::footer::{save_footer_editor, show_footer_editor};
    use crate::routes::public::{
        show_about, show_blog, show_case_studies, show_contact, show_home, show_journey,
        show_our_work, show_service, show_services, submit_contact, subscribe_newsletter,
    };
    use crate::routes::seo::{robots, sitemap};
    use crate::services::home::HomePageCache;

    /// Shared state registered on every worker.
    pub fn build_app_data(
        server_config: &ServerConfig,
    ) -> std::io::Result<(HttpRepository, HomePageCache)> {
        let repo = HttpRepository::new(&server_config.api_url, server_config.request_timeout())
            .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
        let cache = HomePageCache::new(server_config.revalidate());
        Ok((repo, cache))
    }

    /// Public pages and the admin scope.
    pub fn configure_routes(cfg: &mut web::ServiceConfig) {
        cfg.service(robots)
            .service(sitemap)
            .service(
                web::scope("/admin")
                    .wrap(RedirectUnauthorized)
                    .service(admin_root)
                    .service(show_login)
                    .service(submit_login)
                    .service(logout)
                    .service(show_dashboard)
                    .service(show_contacts)
                    .service(save_contact_status)
                    .service(confirm_contact_delete)
                    .service(delete_contact)
                    .service(show_footer_editor)
                    .service(save_footer_editor)
                    .configure(admin::configure),
            )
            .service(show_home)
            .service(show_about)
            .service(show_services)
            .service(show_service)
            .service(show_our_work)
            .service(show_case_studies)
            .service(show_journey)
            .service(show_blog)
            .service(subscribe_newsletter)
            .service(show_contact)
            .service(submit_contact);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let (repo, cache) = build_app_data(&server_config)?;

        // Keys and stores for identity, sessions, and flash messages.
        if server_config.secret.len() < 64 {
            return Err(std::io::Error::other("secret must be at least 64 bytes long"));
        }
        let secret_key = Key::from(server_config.secret.as_bytes());

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Serving {} on {}:{} with content from {}",
            server_config.brand.company_name,
            bind_address.0,
            bind_address.1,
            server_config.api_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(Some(server_config.domain.clone()))
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.static_dir))
                .configure(configure_routes)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(cache.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
