use std::{env, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

/// Wire form of a feed entry. Absent optional fields are omitted, not null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedPayload {
    pub items: Vec<FeedItem>,
}

pub type Db = Arc<RwLock<Vec<FeedItem>>>;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Listen address, read from `HOST` and `PORT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn app() -> Router {
    app_with_items(Vec::new())
}

pub fn app_with_items(items: Vec<FeedItem>) -> Router {
    let db: Db = Arc::new(RwLock::new(items));
    Router::new()
        .route("/feed", get(get_feed).put(replace_feed))
        .route("/status/{code}", get(status_only))
        .route("/invalid-json", get(invalid_json))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_feed(State(db): State<Db>) -> Json<FeedPayload> {
    let items = db.read().await;
    Json(FeedPayload {
        items: items.clone(),
    })
}

async fn replace_feed(State(db): State<Db>, Json(items): Json<Vec<FeedItem>>) -> StatusCode {
    info!(count = items.len(), "replacing feed items");
    *db.write().await = items;
    StatusCode::NO_CONTENT
}

/// Responds with `code` and an empty, well-formed feed body.
async fn status_only(
    Path(code): Path<u16>,
) -> Result<(StatusCode, Json<FeedPayload>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(FeedPayload { items: Vec::new() })))
}

async fn invalid_json() -> &'static str {
    "Invalid Json"
}
