//! View-models and their askama templates.
//!
//! Every page template carries the pending [`Notice`], which the shared
//! layout renders above the page content.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::handlers::flash::{self, Notice};
use crate::models::{Photographer, PricingPackage};

/// Template wrapper that converts askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Render a page, consuming any pending notice.
pub fn render_page<T, F>(jar: CookieJar, build: F) -> Response
where
    T: Template,
    F: FnOnce(Option<Notice>) -> T,
{
    let (jar, notice) = flash::take_notice(jar);
    (jar, HtmlTemplate(build(notice))).into_response()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub notice: Option<Notice>,
    pub photographers: Vec<Photographer>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub notice: Option<Notice>,
    pub gallery_images: Vec<String>,
}

#[derive(Template)]
#[template(path = "photographers.html")]
pub struct PhotographersTemplate {
    pub notice: Option<Notice>,
    pub photographers: Vec<Photographer>,
}

#[derive(Template)]
#[template(path = "photographer_detail.html")]
pub struct PhotographerDetailTemplate {
    pub notice: Option<Notice>,
    pub photographer: Photographer,
}

#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub notice: Option<Notice>,
    pub locations: &'static [&'static str],
    pub packages: &'static [PricingPackage],
}

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub notice: Option<Notice>,
    pub packages: &'static [PricingPackage],
}

#[derive(Template)]
#[template(path = "locations.html")]
pub struct LocationsTemplate {
    pub notice: Option<Notice>,
    pub locations: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub notice: Option<Notice>,
}
