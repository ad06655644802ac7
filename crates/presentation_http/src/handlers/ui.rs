//! Browser UI handler
//!
//! Serves the single-page sowing advisor embedded at build time.

use axum::response::Html;

/// Serve the advisor page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
