//! One-shot notices carried across a redirect.
//!
//! A notice is stored in a cookie on the redirect response. The next page
//! render reads it and clears the cookie in the same response, so it is shown
//! exactly once.

use axum::http::{StatusCode, header::LOCATION};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash_message";

/// Category of a notice; drives its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown on the next rendered page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Category name, used as a CSS class in the layout.
    pub fn category(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    /// Serialize to a cookie-safe value.
    pub fn to_cookie_value(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        urlencoding::encode(&json).into_owned()
    }

    /// Parse a cookie value; anything malformed is treated as no notice.
    pub fn from_cookie_value(raw: &str) -> Option<Self> {
        let json = urlencoding::decode(raw).ok()?;
        serde_json::from_str(&json).ok()
    }
}

/// Redirect to `url` (302 Found) with `notice` attached for the next page.
pub fn redirect_with_notice(jar: CookieJar, url: &'static str, notice: Notice) -> Response {
    let cookie = Cookie::build((FLASH_COOKIE, notice.to_cookie_value()))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true);

    (StatusCode::FOUND, jar.add(cookie), [(LOCATION, url)]).into_response()
}

/// Take the pending notice, if any, and clear it from the session.
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let notice = Notice::from_cookie_value(cookie.value());
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), notice)
}

/// "Thank you {name}!" or plain "Thank you!" when no name was submitted.
pub fn thank_you(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Thank you {}!", name),
        None => "Thank you!".to_string(),
    }
}
