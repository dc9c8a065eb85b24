use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{BookingForm, ContactForm};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Capture Moments",
        version = "1.0.0",
        description = "Photography studio site: photographer directory, portfolio and booking requests"
    ),
    paths(
        handlers::home::home_handler,
        handlers::pages::about_handler,
        handlers::portfolio::portfolio_handler,
        handlers::photographers::photographers_handler,
        handlers::photographers::photographer_detail_handler,
        handlers::pages::booking_handler,
        handlers::booking::book_handler,
        handlers::pages::pricing_handler,
        handlers::pages::locations_handler,
        handlers::pages::events_handler,
        handlers::pages::contact_handler,
        handlers::contact::send_message_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            BookingForm,
            ContactForm,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "pages", description = "Informational pages"),
        (name = "photographers", description = "Photographer directory and profiles"),
        (name = "booking", description = "Booking form and submissions"),
        (name = "contact", description = "Contact form and submissions"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
