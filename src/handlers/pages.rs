//! Pages that render static content or the in-memory catalog only.

use crate::catalog::{LOCATIONS, PRICING_PACKAGES};
use crate::routes;
use crate::views::{
    AboutTemplate, BookingTemplate, ContactTemplate, EventsTemplate, LocationsTemplate,
    PricingTemplate, render_page,
};
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

/// GET /about handler
#[utoipa::path(
    get,
    path = routes::ABOUT,
    responses((status = 200, description = "About page", content_type = "text/html", body = String)),
    tag = "pages"
)]
pub async fn about_handler(jar: CookieJar) -> Response {
    render_page(jar, |notice| AboutTemplate { notice })
}

/// GET /booking handler - Booking form with locations and packages
#[utoipa::path(
    get,
    path = routes::BOOKING,
    responses((status = 200, description = "Booking form", content_type = "text/html", body = String)),
    tag = "booking"
)]
pub async fn booking_handler(jar: CookieJar) -> Response {
    render_page(jar, |notice| BookingTemplate {
        notice,
        locations: LOCATIONS,
        packages: PRICING_PACKAGES,
    })
}

/// GET /pricing handler
#[utoipa::path(
    get,
    path = routes::PRICING,
    responses((status = 200, description = "Pricing packages", content_type = "text/html", body = String)),
    tag = "pages"
)]
pub async fn pricing_handler(jar: CookieJar) -> Response {
    render_page(jar, |notice| PricingTemplate {
        notice,
        packages: PRICING_PACKAGES,
    })
}

/// GET /locations handler
#[utoipa::path(
    get,
    path = routes::LOCATIONS,
    responses((status = 200, description = "Service locations", content_type = "text/html", body = String)),
    tag = "pages"
)]
pub async fn locations_handler(jar: CookieJar) -> Response {
    render_page(jar, |notice| LocationsTemplate {
        notice,
        locations: LOCATIONS,
    })
}

/// GET /events handler
#[utoipa::path(
    get,
    path = routes::EVENTS,
    responses((status = 200, description = "Events page", content_type = "text/html", body = String)),
    tag = "pages"
)]
pub async fn events_handler(jar: CookieJar) -> Response {
    render_page(jar, |notice| EventsTemplate { notice })
}

/// GET /contact handler
#[utoipa::path(
    get,
    path = routes::CONTACT,
    responses((status = 200, description = "Contact form", content_type = "text/html", body = String)),
    tag = "contact"
)]
pub async fn contact_handler(jar: CookieJar) -> Response {
    render_page(jar, |notice| ContactTemplate { notice })
}

#[cfg(test)]
mod tests {
    use crate::app::test_helpers::*;
    use crate::store::testing::UntouchableStore;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_static_pages_never_touch_the_store() {
        let app = app_with(UntouchableStore);

        for uri in ["/about", "/booking", "/pricing", "/locations", "/events", "/contact"] {
            let response = send(&app, get_request(uri)).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
    }

    #[tokio::test]
    async fn test_locations_page_lists_all_cities() {
        let app = app_with(UntouchableStore);

        let body = body_string(send(&app, get_request("/locations")).await).await;
        assert!(body.contains("Hyderabad"));
        assert!(body.contains("Anantapur"));
    }

    #[tokio::test]
    async fn test_booking_form_posts_to_book() {
        let app = app_with(UntouchableStore);

        let body = body_string(send(&app, get_request("/booking")).await).await;
        assert!(body.contains("action=\"/book\""));
        assert!(body.contains("Premium Package"));
    }
}
