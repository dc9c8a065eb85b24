// Route path constants - single source of truth for all site paths

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const PORTFOLIO: &str = "/portfolio";
pub const PHOTOGRAPHERS: &str = "/photographers";
pub const PHOTOGRAPHER_DETAIL: &str = "/photographer/{id}";
pub const BOOKING: &str = "/booking";
pub const BOOK: &str = "/book";
pub const PRICING: &str = "/pricing";
pub const LOCATIONS: &str = "/locations";
pub const EVENTS: &str = "/events";
pub const CONTACT: &str = "/contact";
pub const SEND_MESSAGE: &str = "/send_message";
pub const HEALTH: &str = "/health";
pub const API_DOCS: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
