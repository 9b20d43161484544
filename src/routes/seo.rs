use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;

use crate::models::config::ServerConfig;
use crate::services::seo::{robots_txt, sitemap_xml};

#[get("/robots.txt")]
pub async fn robots(server_config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(robots_txt(&server_config.brand))
}

#[get("/sitemap.xml")]
pub async fn sitemap(server_config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(sitemap_xml(&server_config.brand, Utc::now().date_naive()))
}
