//! src/routes/health_check.rs
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};

pub const HEALTH_CHECK_PATH: &str = "/health-check/";

/// Methods served on `HEALTH_CHECK_PATH`, as advertised in `Allow`.
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Liveness probe. Always answers `200` with the plain-text body `OK`.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}

pub async fn health_check_options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .finish()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .finish()
}

/// `/health-check` without the trailing slash points clients at the canonical
/// path, keeping the query string.
pub async fn health_check_redirect(req: HttpRequest) -> HttpResponse {
    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, canonical_location(req.query_string())))
        .finish()
}

fn canonical_location(query: &str) -> String {
    if query.is_empty() {
        HEALTH_CHECK_PATH.to_string()
    } else {
        format!("{}?{}", HEALTH_CHECK_PATH, query)
    }
}
