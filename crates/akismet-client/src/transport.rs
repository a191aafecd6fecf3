//! HTTP transport seam
//!
//! The client only ever sends a form-encoded POST and reads back status and
//! body text. [`ReqwestTransport`] does that over `reqwest::blocking`; tests
//! substitute their own implementation.

use std::time::Duration;

use akismet_core::AkismetError;

/// A form POST ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
}

/// Status and body text of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error("{0}")]
    Request(String),
}

impl From<TransportError> for AkismetError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Sends one request and returns whatever came back, whatever the status.
pub trait Transport {
    /// # Errors
    ///
    /// Returns error when no response was received.
    fn post_form(&self, request: &FormRequest) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, request: &FormRequest) -> Result<RawResponse, TransportError> {
        (**self).post_form(request)
    }
}

/// Production transport over `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport. `None` keeps reqwest's default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the TLS backend or client fails to initialise.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn post_form(&self, request: &FormRequest) -> Result<RawResponse, TransportError> {
        let mut req = self.client.post(&request.url).form(&request.form);
        for (k, v) in &request.headers {
            req = req.header(k, v);
        }

        let resp = req
            .send()
            .map_err(|e| TransportError::Request(e.without_url().to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| TransportError::Request(e.without_url().to_string()))?;

        Ok(RawResponse { status, body })
    }
}
