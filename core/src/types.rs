//! Domain types for the feed.
//!
//! # Design
//! `FeedItem` is a plain value object with no serde attributes. The wire
//! shape (`image` key, optional text fields) lives in the mapper's private
//! DTOs, so the domain type does not change when the payload format does.

use url::Url;
use uuid::Uuid;

/// A single feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
