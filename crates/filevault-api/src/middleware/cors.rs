//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use filevault_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Wildcards combined with credentials are not allowed by browsers, so in
/// that case the request's own origin or headers are mirrored back.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard = |values: &[String]| values.iter().any(|v| v == "*");
    let mut layer = CorsLayer::new();

    // Origins
    layer = if wildcard(&config.allowed_origins) {
        if config.allow_credentials {
            layer.allow_origin(AllowOrigin::mirror_request())
        } else {
            layer.allow_origin(Any)
        }
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    };

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    layer = if wildcard(&config.allowed_headers) {
        if config.allow_credentials {
            layer.allow_headers(AllowHeaders::mirror_request())
        } else {
            layer.allow_headers(Any)
        }
    } else {
        layer.allow_headers(parse_header_names(&config.allowed_headers))
    };

    layer
        .expose_headers(parse_header_names(&config.exposed_headers))
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn parse_header_names(names: &[String]) -> Vec<HeaderName> {
    names.iter().filter_map(|h| h.parse().ok()).collect()
}
