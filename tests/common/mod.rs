use std::time::Duration;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use showcase::models::config::{BrandConfig, ServerConfig};
use showcase::repository::HttpRepository;
use showcase::services::home::HomePageCache;

/// Configuration pointing at a port nothing listens on.
pub fn offline_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".into(),
        address: "127.0.0.1".into(),
        port: 8080,
        templates_dir: "templates/**/*".into(),
        static_dir: "./assets".into(),
        secret: "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef".into(),
        api_url: "http://127.0.0.1:1/api/v1".into(),
        revalidate_seconds: 300,
        request_timeout_seconds: 2,
        brand: BrandConfig {
            company_name: "Innovate Solutions".into(),
            tagline: "Software that grows with you".into(),
            logo_url: String::new(),
            site_url: "https://innovate.example/".into(),
            email: "hello@innovate.example".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "1 Main Street".into(),
        },
    }
}

/// The full application wired like `showcase::run`, without binding a socket.
pub fn test_app(
    config: ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let repo = HttpRepository::new(&config.api_url, Duration::from_secs(2)).unwrap();
    let cache = HomePageCache::new(config.revalidate());
    let tera = Tera::new(&config.templates_dir).unwrap();

    let secret_key = Key::from(config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    App::new()
        .wrap(message_framework)
        .wrap(IdentityMiddleware::default())
        .wrap(SessionMiddleware::new(CookieSessionStore::default(), secret_key))
        .configure(showcase::configure_routes)
        .app_data(web::Data::new(tera))
        .app_data(web::Data::new(repo))
        .app_data(web::Data::new(cache))
        .app_data(web::Data::new(config))
}
