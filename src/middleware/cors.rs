use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin, `GET`/`POST` only, `Content-Type` as the sole request header.
pub fn quiz_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
