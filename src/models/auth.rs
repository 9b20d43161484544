use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};

/// Bearer token of the signed-in admin, read from the identity cookie.
///
/// Extraction fails with `401 Unauthorized` when no admin is signed in;
/// [`crate::middleware::RedirectUnauthorized`] turns that into a redirect
/// to the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for AdminToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok())
            .filter(|token| !token.trim().is_empty());

        ready(token.map(AdminToken).ok_or_else(|| ErrorUnauthorized("Admin login required")))
    }
}
