use serde::{Deserialize, Serialize};

/// A photographer listed in the directory.
///
/// Only `id` is required; display fields missing from a stored record render
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photographer {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}

/// A portfolio image, keyed by its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image_url: String,
}

/// A stored booking request.
///
/// Optional fields that the visitor did not submit are left out of the
/// stored record entirely rather than written as empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub booking_time: String,
}

impl Booking {
    /// Build a booking from a submitted form, assigning a fresh id and the
    /// given submission time.
    pub fn from_form(form: BookingForm, booking_time: String) -> Self {
        Self {
            booking_id: uuid::Uuid::new_v4().to_string(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            event_type: form.event_type,
            location: form.location,
            event_date: form.date,
            package: form.package,
            message: form.message,
            booking_time,
        }
    }
}

/// Form body for POST /book
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct BookingForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_type: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub package: Option<String>,
    pub message: Option<String>,
}

/// Form body for POST /send_message
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A bookable pricing package. Part of the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPackage {
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub photos: &'static str,
    pub features: &'static [&'static str],
}
