//! Cross-origin policy for the browser client.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Local development origins always allowed.
pub const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8000",
    "http://127.0.0.1:8000",
];

/// Origins allowed for a given frontend URL, deduplicated.
pub fn allowed_origins(frontend_url: &str) -> Vec<HeaderValue> {
    let mut origins: Vec<HeaderValue> = Vec::new();
    let candidates = std::iter::once(frontend_url.trim_end_matches('/')).chain(DEV_ORIGINS);

    for origin in candidates {
        match origin.parse::<HeaderValue>() {
            Ok(value) if !origins.contains(&value) => origins.push(value),
            Ok(_) => {}
            Err(_) => tracing::warn!("Ignoring invalid CORS origin: {}", origin),
        }
    }

    origins
}

/// CORS layer allowing the frontend and local development origins.
pub fn cors_layer(frontend_url: &str) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(frontend_url))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_first_and_deduplicated() {
        let origins = allowed_origins("http://localhost:3000/");
        assert_eq!(origins.len(), DEV_ORIGINS.len());
        assert_eq!(origins[0], "http://localhost:3000");

        let origins = allowed_origins("https://twin.example.com");
        assert_eq!(origins.len(), DEV_ORIGINS.len() + 1);
        assert_eq!(origins[0], "https://twin.example.com");
    }
}
