//! Cross-origin access for the storefront frontend.

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
};
use tracing::warn;

/// Build a CORS handler for `origins`, or `None` when no origin is allowed.
///
/// Origins that are not valid header values are skipped with a warning.
pub(crate) fn cors_handler(origins: &[String]) -> Option<CorsHandler> {
    let origins = allowed_origins(origins);

    if origins.is_empty() {
        return None;
    }

    Some(
        Cors::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
            ]))
            .allow_headers(AllowHeaders::list([AUTHORIZATION, CONTENT_TYPE]))
            .into_handler(),
    )
}

fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(origin, "ignoring invalid CORS origin: {error}");

                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_origins_disable_cors() {
        assert!(cors_handler(&[]).is_none(), "no origins should mean no handler");
        assert!(
            cors_handler(&[" ".to_string()]).is_none(),
            "blank origins should be ignored"
        );
    }

    #[test]
    fn invalid_origins_are_skipped() {
        let origins = allowed_origins(&[
            "https://shop.example.com".to_string(),
            "bad\norigin".to_string(),
        ]);

        assert_eq!(origins, vec![HeaderValue::from_static("https://shop.example.com")]);
    }
}
