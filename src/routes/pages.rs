use axum::response::{Html, IntoResponse};
use tera::Context;

/// GET /. Single-page UI for submitting a review and viewing the result.
pub async fn index() -> impl IntoResponse {
    let ctx = Context::new();
    let tera = crate::templates::get_tera();
    let rendered = tera
        .render("index.html", &ctx)
        .unwrap_or_else(|_| "Template error: index.html".to_string());
    Html(rendered)
}
