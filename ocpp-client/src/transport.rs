use std::io::Read;
use std::time::Duration;

use thiserror::Error;

/// Connection-level failure reported by a transport, before the HTTP
/// status line was obtained.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Response handed back by a transport. The body is a reader rather
/// than a buffer so the status code can be checked before any body
/// byte is consumed.
pub struct TransportResponse {
    pub status: u16,
    pub body: Box<dyn Read>,
}

/// Injection seam for the HTTP layer: one synchronous POST, exposing
/// the status code and a readable body. Implementations decide their
/// own timeout and TLS policy.
pub trait HttpTransport: Send + Sync {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by a blocking reqwest client.
pub struct HttpClientTransport {
    inner: reqwest::blocking::Client,
}

impl HttpClientTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::new)?;
        Ok(Self { inner })
    }
}

impl HttpTransport for HttpClientTransport {
    fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .inner
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .map_err(TransportError::new)?;
        Ok(TransportResponse {
            status: response.status().as_u16(),
            body: Box::new(response),
        })
    }
}
