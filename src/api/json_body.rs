use std::sync::Arc;

use poem::http::{header, HeaderValue, Method};
use poem::{Endpoint, IntoResponse, Request, Response, Result};

/// Whether a `Content-Type` value names a JSON media type
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Treat POST bodies that are not declared as JSON as an empty object
///
/// Browsers and form posts may send no `Content-Type` at all. Such requests
/// then fail field validation with a 400 instead of a 415 from the JSON extractor.
pub async fn default_non_json_body<E: Endpoint>(next: Arc<E>, mut req: Request) -> Result<Response> {
    let declared_json = req
        .content_type()
        .map(is_json_content_type)
        .unwrap_or(false);

    if req.method() == Method::POST && !declared_json {
        tracing::debug!(
            "Replacing non-JSON body ({}) on {} with an empty object",
            req.content_type().unwrap_or("no content type"),
            req.uri().path()
        );
        req.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        req.set_body("{}");
    }

    next.call(req).await.map(IntoResponse::into_response)
}
