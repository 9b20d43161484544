use actix_web::http::{StatusCode, header};
use actix_web::test;
use actix_web_flash_messages::Level;
use showcase::routes::alert_level_to_str;

mod common;

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn robots_txt_hides_admin_and_links_sitemap() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get().uri("/robots.txt").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Disallow: /admin/"));
    assert!(body.contains("Sitemap: https://innovate.example/sitemap.xml"));
}

#[actix_web::test]
async fn sitemap_lists_public_pages_without_trailing_slash() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get().uri("/sitemap.xml").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert_eq!(body.matches("<loc>").count(), 8);
    assert!(body.contains("<loc>https://innovate.example/our-journey</loc>"));
    assert!(!body.contains("example//"));
}

#[actix_web::test]
async fn home_page_renders_defaults_when_backend_is_unreachable() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Innovative Software Solutions for a Digital World"));
    assert!(body.contains("Custom Software"));
    assert!(body.contains("Web App Development"));
    assert!(body.contains("Projects Completed"));
    assert!(body.contains("98%"));
    // Footer falls back to the brand configuration.
    assert!(body.contains("hello@innovate.example"));
}

#[actix_web::test]
async fn blog_page_renders_empty_state_when_backend_is_unreachable() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get()
        .uri("/blog?category=Engineering&page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("No articles found."));
}

#[actix_web::test]
async fn admin_pages_redirect_anonymous_visitors_to_login() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    for uri in ["/admin/dashboard", "/admin/hero", "/admin/contacts", "/admin/footer"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/admin/login");
    }
}

#[actix_web::test]
async fn login_page_is_public() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get().uri("/admin/login").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_service_slug_redirects_to_services() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get().uri("/services/Not%20A%20Slug").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/services");
}

#[actix_web::test]
async fn malformed_page_parameter_renders_first_page() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get()
        .uri("/blog?page=abc&search=rust")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    // Category links and the search form start over from the first page.
    assert!(body.contains("href=\"/blog?category=All&search=rust\""));
    assert!(!body.contains("?page="));
    assert!(!body.contains("name=\"page\""));
}

#[actix_web::test]
async fn our_work_filter_form_drops_page() {
    let app = test::init_service(common::test_app(common::offline_config())).await;

    let req = test::TestRequest::get()
        .uri("/our-work?page=not-a-number&category=Mobile+Apps")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("action=\"/our-work\""));
    assert!(body.contains("<option value=\"Mobile Apps\" selected>"));
    assert!(!body.contains("name=\"page\""));
    assert!(!body.contains("?page="));
}
