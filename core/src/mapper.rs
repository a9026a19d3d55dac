//! Pure translation of an HTTP response into feed items.
//!
//! # Design
//! The body is decoded into private wire DTOs first and converted into
//! `FeedItem` values in one pass. Decoding is all-or-nothing: one bad entry
//! fails the whole payload, so callers never receive a partial list.

use serde::Deserialize;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::error::LoadError;
use crate::loader::LoadFeedResult;
use crate::types::FeedItem;

const OK_200: u16 = 200;

#[derive(Debug, Deserialize)]
struct RootDto {
    items: Vec<ItemDto>,
}

/// Wire shape of one entry. Optional text fields accept both an absent key
/// and an explicit `null`.
#[derive(Debug, Deserialize)]
struct ItemDto {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl RootDto {
    fn into_items(self) -> Vec<FeedItem> {
        self.items.into_iter().map(ItemDto::into_item).collect()
    }
}

impl ItemDto {
    fn into_item(self) -> FeedItem {
        FeedItem {
            id: self.id,
            description: self.description,
            location: self.location,
            image_url: self.image,
        }
    }
}

/// Maps a status code and body to a `LoadFeedResult`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Any status other than 200 is `InvalidData` without looking at the
    /// body. A 200 body must be `{"items": [...]}`; items keep their order.
    pub fn map(body: &[u8], status: u16) -> LoadFeedResult {
        if status != OK_200 {
            debug!(status, "rejecting feed response with unexpected status");
            return Err(LoadError::InvalidData);
        }

        match serde_json::from_slice::<RootDto>(body) {
            Ok(root) => Ok(root.into_items()),
            Err(e) => {
                debug!(error = %e, "feed body could not be decoded");
                Err(LoadError::InvalidData)
            }
        }
    }
}
