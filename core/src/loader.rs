//! Feed loading over an `HttpClient`.
//!
//! # Design
//! `RemoteFeedLoader` owns its URL and shares the client through an `Arc`
//! the caller also holds. Each `load` issues one GET and hands the client a
//! continuation that captures only a `Weak` handle to the loader's liveness
//! token, never the loader itself. Dropping the loader therefore suppresses
//! any delivery still in flight without aborting the transport.

use std::sync::{Arc, Weak};

use tracing::debug;
use url::Url;

use crate::error::LoadError;
use crate::http::{Completion, HttpClient, HttpClientResult};
use crate::mapper::FeedItemsMapper;
use crate::types::FeedItem;

/// Result delivered to a `load` completion.
pub type LoadFeedResult = Result<Vec<FeedItem>, LoadError>;

/// Anything that can produce the feed asynchronously.
pub trait FeedLoader {
    /// Starts a load. `completion` runs exactly once while the loader is
    /// alive, and never after it has been dropped.
    fn load(&self, completion: Completion<LoadFeedResult>);
}

/// Loads the feed from a fixed URL through an `HttpClient`.
///
/// Construction performs no I/O. Every `load` call issues its own GET; calls
/// are neither coalesced nor cancelled by later ones.
pub struct RemoteFeedLoader<C: ?Sized> {
    url: Url,
    client: Arc<C>,
    alive: Arc<()>,
}

impl<C: HttpClient + ?Sized> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }
}

impl<C: HttpClient + ?Sized> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: Completion<LoadFeedResult>) {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        debug!(url = %self.url, "requesting feed");

        self.client.get(
            &self.url,
            Box::new(move |result| {
                // Stays upgraded until the completion returns.
                let Some(_alive) = alive.upgrade() else {
                    debug!("loader dropped before response arrived; discarding result");
                    return;
                };
                completion(map_client_result(result));
            }),
        );
    }
}

impl<C: ?Sized> std::fmt::Debug for RemoteFeedLoader<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

fn map_client_result(result: HttpClientResult) -> LoadFeedResult {
    match result {
        Ok(response) => FeedItemsMapper::map(&response.body, response.status),
        Err(e) => {
            debug!(error = %e, "feed request failed");
            Err(LoadError::Connectivity)
        }
    }
}
