use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the full site router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HOME, get(handlers::home_handler))
        .route(routes::ABOUT, get(handlers::about_handler))
        .route(routes::PORTFOLIO, get(handlers::portfolio_handler))
        .route(routes::PHOTOGRAPHERS, get(handlers::photographers_handler))
        .route(
            routes::PHOTOGRAPHER_DETAIL,
            get(handlers::photographer_detail_handler),
        )
        .route(routes::BOOKING, get(handlers::booking_handler))
        .route(routes::BOOK, post(handlers::book_handler))
        .route(routes::PRICING, get(handlers::pricing_handler))
        .route(routes::LOCATIONS, get(handlers::locations_handler))
        .route(routes::EVENTS, get(handlers::events_handler))
        .route(routes::CONTACT, get(handlers::contact_handler))
        .route(routes::SEND_MESSAGE, post(handlers::send_message_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::API_DOCS, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
