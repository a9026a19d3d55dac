//! Remote feed loading core.
//!
//! # Overview
//! Fetches a feed document with a single GET, classifies the outcome, and
//! decodes the `{"items": [...]}` payload into `FeedItem` values delivered to
//! a caller-supplied completion.
//!
//! # Design
//! - `HttpClient` is the only I/O seam. `RemoteFeedLoader` never touches the
//!   network itself, so its behaviour is testable with an in-memory spy.
//! - `FeedItemsMapper` is pure: status code plus body bytes in, result out.
//! - Callers only ever see `LoadError::Connectivity` or
//!   `LoadError::InvalidData`; transport and decode errors are normalised
//!   before delivery.
//! - `UreqHttpClient` (feature `ureq-client`) is a ready-made blocking
//!   transport that reports on a worker thread.

pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod types;
#[cfg(feature = "ureq-client")]
pub mod ureq_client;

pub use error::LoadError;
pub use http::{Completion, HttpClient, HttpClientResult, HttpResponse, TransportError};
pub use loader::{FeedLoader, LoadFeedResult, RemoteFeedLoader};
pub use mapper::FeedItemsMapper;
pub use types::FeedItem;
#[cfg(feature = "ureq-client")]
pub use ureq_client::UreqHttpClient;
