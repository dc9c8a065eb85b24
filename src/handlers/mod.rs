pub mod booking;
pub mod contact;
pub mod flash;
pub mod health;
pub mod home;
pub mod pages;
pub mod photographers;
pub mod portfolio;

pub use booking::book_handler;
pub use contact::send_message_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use pages::{
    about_handler, booking_handler, contact_handler, events_handler, locations_handler,
    pricing_handler,
};
pub use photographers::{photographer_detail_handler, photographers_handler};
pub use portfolio::portfolio_handler;
