use crate::routes;
use crate::state::AppState;
use crate::views::{PortfolioTemplate, render_page};
use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// GET /portfolio handler - Gallery of portfolio images
#[utoipa::path(
    get,
    path = routes::PORTFOLIO,
    responses(
        (status = 200, description = "Gallery page, empty when the store is unavailable", content_type = "text/html", body = String)
    ),
    tag = "pages"
)]
pub async fn portfolio_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let gallery_images: Vec<String> = match state.store.gallery_images().await {
        Ok(images) => images.into_iter().map(|image| image.image_url).collect(),
        Err(e) => {
            tracing::error!("Error retrieving gallery images: {}", e);
            Vec::new()
        }
    };

    render_page(jar, |notice| PortfolioTemplate {
        notice,
        gallery_images,
    })
}
