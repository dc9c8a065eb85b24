use crate::handlers::flash::{Notice, redirect_with_notice, thank_you};
use crate::models::{Booking, BookingForm};
use crate::routes;
use crate::state::AppState;
use axum::{Form, extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

/// POST /book handler - Store a booking request
///
/// Every form field is optional; fields that were not submitted are left out
/// of the stored booking. The booking id and timestamp are assigned here.
/// The store is called once and never retried: on failure the visitor is
/// sent back to the form with an error notice.
#[utoipa::path(
    post,
    path = routes::BOOK,
    request_body(content = BookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirects to /booking with a success or error notice")
    ),
    tag = "booking"
)]
pub async fn book_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BookingForm>,
) -> Response {
    let greeting = thank_you(form.name.as_deref());
    let booking = Booking::from_form(form, Utc::now().to_rfc3339());

    let notice = match state.store.put_booking(&booking).await {
        Ok(()) => {
            tracing::info!("Stored booking with id: {}", booking.booking_id);
            Notice::success(format!(
                "{} Your booking request has been submitted. We will contact you soon.",
                greeting
            ))
        }
        Err(e) => {
            tracing::error!("Error saving booking {}: {}", booking.booking_id, e);
            Notice::error("There was an error processing your booking. Please try again.")
        }
    };

    redirect_with_notice(jar, routes::BOOKING, notice)
}
