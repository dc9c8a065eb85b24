use crate::error::{ApiError, ErrorResponse};
use crate::handlers::flash::{Notice, redirect_with_notice};
use crate::routes;
use crate::state::AppState;
use crate::views::{PhotographerDetailTemplate, PhotographersTemplate, render_page};
use axum::{
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

/// Integer photographer id taken from the path.
///
/// Only plain decimal digits are accepted; signs, fractions and values past
/// `i64::MAX` are rejected here with a 400, so the handler and the store never
/// see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotographerId(pub i64);

impl<S> FromRequestParts<S> for PhotographerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidPhotographerId(e.body_text()))?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::InvalidPhotographerId(raw));
        }

        raw.parse::<i64>()
            .map(PhotographerId)
            .map_err(|_| ApiError::InvalidPhotographerId(raw))
    }
}

/// GET /photographers handler - Full photographer directory
#[utoipa::path(
    get,
    path = routes::PHOTOGRAPHERS,
    responses(
        (status = 200, description = "Directory page, empty when the store is unavailable", content_type = "text/html", body = String)
    ),
    tag = "photographers"
)]
pub async fn photographers_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let photographers = match state.store.photographers(None).await {
        Ok(photographers) => photographers,
        Err(e) => {
            tracing::error!("Error retrieving all photographers: {}", e);
            Vec::new()
        }
    };

    render_page(jar, |notice| PhotographersTemplate {
        notice,
        photographers,
    })
}

/// GET /photographer/{id} handler - Single photographer profile
#[utoipa::path(
    get,
    path = routes::PHOTOGRAPHER_DETAIL,
    params(
        ("id" = i64, Path, description = "Photographer id")
    ),
    responses(
        (status = 200, description = "Photographer profile", content_type = "text/html", body = String),
        (status = 302, description = "Unknown photographer or store unavailable; redirects to /photographers with an error notice"),
        (status = 400, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "photographers"
)]
pub async fn photographer_detail_handler(
    State(state): State<AppState>,
    PhotographerId(id): PhotographerId,
    jar: CookieJar,
) -> Response {
    let photographer = match state.store.photographer(id).await {
        Ok(photographer) => photographer,
        Err(e) => {
            tracing::error!("Error retrieving photographer {}: {}", id, e);
            None
        }
    };

    match photographer {
        Some(photographer) => render_page(jar, |notice| PhotographerDetailTemplate {
            notice,
            photographer,
        }),
        None => {
            tracing::info!("Photographer not found with id: {}", id);
            redirect_with_notice(
                jar,
                routes::PHOTOGRAPHERS,
                Notice::error("Photographer not found"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_helpers::*;
    use crate::error::ErrorResponse;
    use crate::store::testing::{FailingStore, UntouchableStore};
    use crate::store::{KeyValueStore, Record, Table};
    use axum::http::{StatusCode, header::LOCATION};
    use serde_json::json;

    fn partial_photographer() -> Record {
        match json!({ "id": 99, "name": "Partial" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_directory_lists_all_photographers() {
        let (app, _) = seeded_app().await;

        let response = send(&app, get_request("/photographers")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(body.matches("class=\"card photographer\"").count(), 3);
        for name in ["Rajesh Kumar", "Priya Sharma", "Arjun Reddy"] {
            assert!(body.contains(name));
        }
    }

    #[tokio::test]
    async fn test_partial_record_does_not_hide_the_directory() {
        let (app, memory) = seeded_app().await;
        memory
            .put_item(Table::Photographers, partial_photographer())
            .await
            .unwrap();

        let body = body_string(send(&app, get_request("/photographers")).await).await;
        for name in ["Rajesh Kumar", "Priya Sharma", "Arjun Reddy", "Partial"] {
            assert!(body.contains(name), "missing {}", name);
        }

        let home = body_string(send(&app, get_request("/")).await).await;
        assert_eq!(home.matches("featured-photographer").count(), 3);

        let response = send(&app, get_request("/photographer/99")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Partial"));
    }

    #[tokio::test]
    async fn test_directory_on_store_failure() {
        let app = app_with(FailingStore);

        let response = send(&app, get_request("/photographers")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("No photographers are available right now."));
    }

    #[tokio::test]
    async fn test_detail_existing_photographer() {
        let (app, _) = seeded_app().await;

        let response = send(&app, get_request("/photographer/2")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Priya Sharma"));
        assert!(body.contains("Visakhapatnam"));
        assert!(body.contains("6 years"));
        assert!(!body.contains("Rajesh Kumar"));
    }

    #[tokio::test]
    async fn test_detail_missing_photographer_redirects_with_error() {
        let (app, _) = seeded_app().await;

        let response = send(&app, get_request("/photographer/404")).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/photographers");

        let cookie = flash_cookie(&response).expect("flash cookie");
        let follow = send(&app, get_with_cookie("/photographers", &cookie)).await;
        let body = body_string(follow).await;
        assert!(body.contains("notice-error"));
        assert!(body.contains("Photographer not found"));
    }

    #[tokio::test]
    async fn test_detail_store_failure_redirects_with_error() {
        let app = app_with(FailingStore);

        let response = send(&app, get_request("/photographer/1")).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/photographers");
        assert!(flash_cookie(&response).is_some());
    }

    #[tokio::test]
    async fn test_detail_non_integer_id_rejected_before_lookup() {
        let app = app_with(UntouchableStore);

        for uri in [
            "/photographer/abc",
            "/photographer/1.5",
            "/photographer/1e3",
            "/photographer/+5",
            "/photographer/-3",
            "/photographer/99999999999999999999",
        ] {
            let response = send(&app, get_request(uri)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {}", uri);

            let body = body_string(response).await;
            let error_response: ErrorResponse = serde_json::from_str(&body).unwrap();
            assert!(error_response.error.contains("Invalid photographer id"));
        }
    }
}
