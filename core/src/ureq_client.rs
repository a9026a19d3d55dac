//! Blocking `HttpClient` backed by `ureq`.
//!
//! # Design
//! Each `get` runs on its own worker thread and reports from there. ureq's
//! status-as-error behaviour is disabled so 4xx/5xx responses come back as
//! data and status interpretation stays with `FeedItemsMapper`. Only
//! failures to complete the exchange (connect, DNS, timeout, body read)
//! become `TransportError`.
//!
//! Bodies are read up to `DEFAULT_BODY_LIMIT` bytes unless overridden with
//! `with_body_limit`. A larger body is a failed read, so the loader reports
//! it as `Connectivity`, not `InvalidData`.

use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::warn;
use ureq::Agent;
use url::Url;

use crate::http::{Completion, HttpClient, HttpClientResult, HttpResponse, TransportError};

/// Largest response body read by default, in bytes.
pub const DEFAULT_BODY_LIMIT: u64 = 10 * 1024 * 1024;

/// `HttpClient` that performs blocking GETs on worker threads.
#[derive(Debug, Clone)]
pub struct UreqHttpClient {
    agent: Agent,
    body_limit: u64,
}

impl UreqHttpClient {
    /// Client without a timeout.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Client that gives up on any request after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Caps the number of body bytes read per response.
    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqHttpClient {
    fn get(&self, url: &Url, completion: Completion<HttpClientResult>) {
        let agent = self.agent.clone();
        let body_limit = self.body_limit;
        let url = url.clone();

        // Shared with the worker so a failed spawn can still report.
        let slot = Arc::new(Mutex::new(Some(completion)));
        let worker_slot = Arc::clone(&slot);

        let spawned = thread::Builder::new()
            .name("feed-http-get".to_string())
            .spawn(move || {
                let outcome = execute(&agent, &url, body_limit);
                if let Err(e) = &outcome {
                    warn!(url = %url, error = %e, "GET failed");
                }
                if let Some(completion) = take(&worker_slot) {
                    completion(outcome);
                }
            });

        if let Err(e) = spawned {
            report_spawn_failure(&slot, e);
        }
    }
}

fn report_spawn_failure(slot: &Mutex<Option<Completion<HttpClientResult>>>, error: io::Error) {
    warn!(error = %error, "could not spawn HTTP worker thread");
    if let Some(completion) = take(slot) {
        completion(Err(TransportError::new(error)));
    }
}

fn take(
    slot: &Mutex<Option<Completion<HttpClientResult>>>,
) -> Option<Completion<HttpClientResult>> {
    slot.lock().ok().and_then(|mut guard| guard.take())
}

fn execute(agent: &Agent, url: &Url, body_limit: u64) -> HttpClientResult {
    let mut response = agent.get(url.as_str()).call().map_err(TransportError::new)?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .with_config()
        .limit(body_limit)
        .read_to_vec()
        .map_err(TransportError::new)?;
    Ok(HttpResponse { status, body })
}
