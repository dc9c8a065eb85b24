use crate::handlers::flash::{Notice, redirect_with_notice, thank_you};
use crate::models::ContactForm;
use crate::routes;
use axum::{Form, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// POST /send_message handler - Acknowledge a contact message
///
/// Messages are not stored or forwarded anywhere; the visitor only gets a
/// confirmation notice on the contact page.
#[utoipa::path(
    post,
    path = routes::SEND_MESSAGE,
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirects to /contact with a confirmation notice")
    ),
    tag = "contact"
)]
pub async fn send_message_handler(jar: CookieJar, Form(form): Form<ContactForm>) -> Response {
    tracing::info!(
        "Contact message received from {} with subject: {} ({} chars)",
        form.email.as_deref().unwrap_or("<no email>"),
        form.subject.as_deref().unwrap_or("<none>"),
        form.message.as_deref().map_or(0, str::len)
    );

    let notice = Notice::success(format!(
        "{} Your message has been sent successfully.",
        thank_you(form.name.as_deref())
    ));

    redirect_with_notice(jar, routes::CONTACT, notice)
}

#[cfg(test)]
mod tests {
    use crate::app::test_helpers::*;
    use crate::store::testing::UntouchableStore;
    use axum::http::{StatusCode, header::LOCATION, header::SET_COOKIE};

    #[tokio::test]
    async fn test_send_message_redirects_to_contact() {
        let app = app_with(UntouchableStore);

        let response = send(
            &app,
            post_form(
                "/send_message",
                "name=Kiran&email=kiran%40example.com&subject=Quote&message=Hello",
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/contact");
        assert!(flash_cookie(&response).is_some());
    }

    #[tokio::test]
    async fn test_notice_is_shown_once() {
        let app = app_with(UntouchableStore);

        let response = send(&app, post_form("/send_message", "name=Kiran")).await;
        let cookie = flash_cookie(&response).expect("flash cookie");

        let follow = send(&app, get_with_cookie("/contact", &cookie)).await;
        assert_eq!(follow.status(), StatusCode::OK);
        let cleared = follow
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .any(|v| v.starts_with("flash_message=") && v.contains("Max-Age=0"));
        assert!(cleared, "rendering the notice should clear the cookie");

        let body = body_string(follow).await;
        assert!(body.contains("notice-success"));
        assert!(body.contains("Thank you Kiran! Your message has been sent successfully."));

        let later = body_string(send(&app, get_request("/contact")).await).await;
        assert!(!later.contains("notice-"));
    }

    #[tokio::test]
    async fn test_send_message_without_name() {
        let app = app_with(UntouchableStore);

        let response = send(&app, post_form("/send_message", "message=Hi")).await;
        let cookie = flash_cookie(&response).expect("flash cookie");

        let body = body_string(send(&app, get_with_cookie("/contact", &cookie)).await).await;
        assert!(body.contains("Thank you! Your message has been sent successfully."));
    }
}
