use crate::models::Photographer;
use crate::routes;
use crate::state::AppState;
use crate::store::StoreClient;
use crate::views::{IndexTemplate, render_page};
use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// How many photographers the home page features.
pub const FEATURED_LIMIT: i32 = 3;

/// GET / handler - Home page with up to three featured photographers
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Home page", content_type = "text/html", body = String)
    ),
    tag = "pages"
)]
pub async fn home_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let photographers = featured_photographers(&state.store).await;

    render_page(jar, |notice| IndexTemplate {
        notice,
        photographers,
    })
}

/// The first few photographers, or none when the store is unavailable.
pub async fn featured_photographers(store: &StoreClient) -> Vec<Photographer> {
    match store.photographers(Some(FEATURED_LIMIT)).await {
        Ok(photographers) => photographers,
        Err(e) => {
            tracing::error!("Error retrieving photographers for home page: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_helpers::*;
    use crate::store::testing::FailingStore;
    use crate::store::{InMemoryStore, KeyValueStore, Table, to_record};
    use axum::http::StatusCode;

    async fn store_with(count: i64) -> StoreClient {
        let memory = InMemoryStore::new();
        for id in 1..=count {
            let photographer = Photographer {
                id,
                name: format!("Photographer {}", id),
                specialty: "Weddings".to_string(),
                location: "Nellore".to_string(),
                experience: format!("{} years", id),
                rating: 4.0,
                image: format!("https://example.com/{}.jpg", id),
            };
            memory
                .put_item(Table::Photographers, to_record(&photographer).unwrap())
                .await
                .unwrap();
        }
        StoreClient::new(memory)
    }

    #[tokio::test]
    async fn test_featured_caps_at_three() {
        let store = store_with(5).await;
        assert_eq!(featured_photographers(&store).await.len(), 3);
    }

    #[tokio::test]
    async fn test_featured_with_fewer_than_three() {
        for count in 0..3 {
            let store = store_with(count).await;
            assert_eq!(featured_photographers(&store).await.len(), count as usize);
        }
    }

    #[tokio::test]
    async fn test_featured_on_store_failure_is_empty() {
        let store = StoreClient::new(FailingStore);
        assert!(featured_photographers(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_home_endpoint_renders_seeded_photographers() {
        let (app, _) = seeded_app().await;

        let response = send(&app, get_request("/")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(body.matches("featured-photographer").count(), 3);
        assert!(body.contains("Rajesh Kumar"));
        assert!(body.contains("/photographer/2"));
    }

    #[tokio::test]
    async fn test_home_endpoint_renders_when_store_fails() {
        let app = app_with(FailingStore);

        let response = send(&app, get_request("/")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(body.matches("featured-photographer").count(), 0);
        assert!(body.contains("Our photographers will be listed here soon."));
    }
}
