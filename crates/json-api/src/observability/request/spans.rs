//! HTTP span helpers.
//!
//! Span names and the metrics `route` label use the route template rather
//! than the raw path, so `/orders/0190...` is reported as `/orders/{order}`.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = route_template(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Placeholder for an identifier that follows `collection`.
fn placeholder(collection: Option<&str>) -> &'static str {
    match collection {
        Some("products" | "inventory" | "items") => "{product}",
        Some("orders") => "{order}",
        Some("notifications") => "{notification}",
        Some("categories") => "{category}",
        Some("accounts") => "{account}",
        _ => "{uuid}",
    }
}

fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return "/".to_owned();
    }

    let mut previous = None;
    let mut template = String::new();

    for segment in segments {
        template.push('/');

        if Uuid::parse_str(segment).is_ok() {
            template.push_str(placeholder(previous));
        } else {
            template.push_str(segment);
        }

        previous = Some(segment);
    }

    template
}
