use axum::response::Html;

/// Viewer page, embedded at compile time.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the step-by-step viewer (GET /)
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
