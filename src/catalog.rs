//! Static catalog data that never touches the store.

use crate::models::PricingPackage;

/// Cities where sessions can be booked.
pub const LOCATIONS: &[&str] = &[
    "Hyderabad",
    "Visakhapatnam",
    "Vijayawada",
    "Guntur",
    "Nellore",
    "Kurnool",
    "Rajahmundry",
    "Tirupati",
    "Eluru",
    "Anantapur",
];

pub const PRICING_PACKAGES: &[PricingPackage] = &[
    PricingPackage {
        name: "Basic Package",
        price: "₹15,000",
        duration: "4 hours",
        photos: "100 edited photos",
        features: &["Online gallery", "High-resolution images", "Basic editing"],
    },
    PricingPackage {
        name: "Premium Package",
        price: "₹25,000",
        duration: "8 hours",
        photos: "200 edited photos",
        features: &[
            "Online gallery",
            "High-resolution images",
            "Advanced editing",
            "USB drive",
            "Photobook",
        ],
    },
    PricingPackage {
        name: "Luxury Package",
        price: "₹40,000",
        duration: "12 hours",
        photos: "300 edited photos",
        features: &[
            "Online gallery",
            "High-resolution images",
            "Advanced editing",
            "USB drive",
            "Photobook",
            "Same-day highlights",
            "Drone shots",
        ],
    },
];
