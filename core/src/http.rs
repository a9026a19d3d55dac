//! HTTP transport contract for the feed loader.
//!
//! # Design
//! `HttpClient` is a capability trait with a single `get` operation. The
//! implementer decides where and when the completion runs (worker thread,
//! event loop, or synchronously in a test double) and owns any timeout or
//! retry policy. The loader only distinguishes "a response arrived" from
//! "the transport failed".
//!
//! Responses are plain data: a status code and the raw body bytes. Headers
//! are not carried because nothing downstream reads them.

use std::error::Error;
use std::fmt;

use url::Url;

/// One-shot callback handed to an asynchronous operation.
pub type Completion<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// Outcome of a single `HttpClient::get` call.
pub type HttpClientResult = Result<HttpResponse, TransportError>;

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Opaque transport failure.
///
/// Wraps whatever error the transport produced. The loader never inspects
/// it; it exists so transports can log or chain the underlying cause.
#[derive(Debug)]
pub struct TransportError(Box<dyn Error + Send + Sync + 'static>);

impl TransportError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        Self(error.into())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

/// Performs a single GET and reports exactly one outcome.
///
/// Implementations must call `completion` exactly once per `get` call and
/// must not retry on their own behalf. Concurrent calls are independent.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: Completion<HttpClientResult>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_wraps_message() {
        let err = TransportError::new("connection refused");
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert_eq!(err.source().unwrap().to_string(), "connection refused");
    }

    #[test]
    fn transport_error_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = TransportError::new(io);
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn response_from_str_body() {
        let response = HttpResponse::new(200, "{}");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"{}".to_vec());
    }
}
