//! Startup seeding of the photographers and gallery tables.
//!
//! A table is seeded only when a scan finds it empty. A table that holds
//! anything at all, even a partial seed left by an interrupted start, is left
//! alone. Two instances booting at the same time may both see an empty table
//! and both insert; puts overwrite by key so the result is the same seed set.
//!
//! Store failures are logged and swallowed. Seeding never aborts startup and
//! never retries.

use crate::models::{GalleryImage, Photographer};
use serde::Serialize;

use crate::store::{StoreClient, Table, to_record};

/// What happened to one table during seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and this many records were inserted.
    Seeded(usize),
    /// The table already held records.
    Skipped,
    /// A store error stopped the check or the inserts.
    Failed,
}

/// Per-table result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub photographers: SeedOutcome,
    pub gallery_images: SeedOutcome,
}

/// Seed every eligible table that is currently empty.
pub async fn populate_tables(store: &StoreClient) -> SeedReport {
    let photographers = seed_table(store, Table::Photographers, &seed_photographers()).await;
    let gallery_images = seed_table(store, Table::GalleryImages, &seed_gallery_images()).await;

    SeedReport {
        photographers,
        gallery_images,
    }
}

async fn seed_table<T: Serialize>(store: &StoreClient, table: Table, entries: &[T]) -> SeedOutcome {
    match store.scan(table, None).await {
        Ok(existing) if !existing.is_empty() => {
            tracing::debug!("Table {} already has {} records, not seeding", table, existing.len());
            return SeedOutcome::Skipped;
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Error checking/populating {} table: {}", table, e);
            return SeedOutcome::Failed;
        }
    }

    tracing::info!("Populating {} table...", table);
    for entry in entries {
        let inserted = match to_record(entry) {
            Ok(record) => store.put_item(table, record).await,
            Err(e) => Err(e),
        };
        if let Err(e) = inserted {
            tracing::error!("Error checking/populating {} table: {}", table, e);
            return SeedOutcome::Failed;
        }
    }
    tracing::info!("Populated {} table with {} records", table, entries.len());

    SeedOutcome::Seeded(entries.len())
}

/// Photographers inserted into an empty directory.
pub fn seed_photographers() -> Vec<Photographer> {
    vec![
        Photographer {
            id: 1,
            name: "Rajesh Kumar".to_string(),
            specialty: "Wedding Photography".to_string(),
            location: "Hyderabad".to_string(),
            experience: "8 years".to_string(),
            rating: 4.9,
            image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop".to_string(),
        },
        Photographer {
            id: 2,
            name: "Priya Sharma".to_string(),
            specialty: "Portrait & Fashion".to_string(),
            location: "Visakhapatnam".to_string(),
            experience: "6 years".to_string(),
            rating: 4.8,
            image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop".to_string(),
        },
        Photographer {
            id: 3,
            name: "Arjun Reddy".to_string(),
            specialty: "Event Photography".to_string(),
            location: "Vijayawada".to_string(),
            experience: "5 years".to_string(),
            rating: 4.7,
            image: "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop".to_string(),
        },
    ]
}

/// Gallery images inserted into an empty portfolio.
pub fn seed_gallery_images() -> Vec<GalleryImage> {
    [
        "https://images.pexels.com/photos/1024993/pexels-photo-1024993.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        "https://images.pexels.com/photos/1043474/pexels-photo-1043474.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        "https://images.pexels.com/photos/1729931/pexels-photo-1729931.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        "https://images.pexels.com/photos/1444442/pexels-photo-1444442.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        "https://images.pexels.com/photos/1616470/pexels-photo-1616470.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
        "https://images.pexels.com/photos/1024960/pexels-photo-1024960.jpeg?auto=compress&cs=tinysrgb&w=400&h=600&fit=crop",
    ]
    .into_iter()
    .map(|url| GalleryImage {
        image_url: url.to_string(),
    })
    .collect()
}
