//! akismet-client: Blocking client for the Akismet API

pub mod client;
pub mod transport;

pub use client::Client;
pub use transport::{FormRequest, RawResponse, ReqwestTransport, Transport, TransportError};

pub use akismet_core::{AkismetError, ClientConfig, ParameterSet, ReportKind, UserAgentHeader};
