use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for the given comma-separated origin list.
///
/// `None`, an empty list, or a list with no parseable origin allows any
/// origin. Credentials are never allowed, so the wildcard is safe to send.
pub fn create_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .filter_map(|origin| {
            let origin = origin.trim();
            if origin.is_empty() {
                None
            } else {
                origin.parse::<HeaderValue>().ok()
            }
        })
        .collect();

    let origins = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_credentials(false)
        .max_age(Duration::from_secs(86400))
}
