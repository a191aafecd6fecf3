//! akismet-core: Protocol rules for the Akismet spam-classification API
//!
//! This crate owns everything about an Akismet exchange that does not touch the
//! network: the allowed parameter schema, request validation, endpoint URLs,
//! response interpretation and client configuration.

pub mod config;
pub mod error;
pub mod operation;
pub mod params;
pub mod response;

pub use config::{ClientConfig, ConfigError, UserAgentHeader};
pub use error::AkismetError;
pub use operation::{AKISMET_USER_AGENT, Operation, ReportKind};
pub use params::{ALLOWED_PARAMETERS, ParameterSet};
pub use response::SUBMIT_ACK;
