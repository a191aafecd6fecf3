//! Interpretation of Akismet response bodies
//!
//! The service answers in plain text. Anything outside the documented bodies
//! is surfaced verbatim as [`AkismetError::Server`].

use crate::error::AkismetError;

/// Body returned by submit-spam and submit-ham on success.
pub const SUBMIT_ACK: &str = "Thanks for making the web a better place.";

/// comment-check: `"true"` is spam, `"false"` is ham.
///
/// # Errors
///
/// Returns [`AkismetError::Server`] with the raw body for anything else.
pub fn interpret_check(body: &str) -> Result<bool, AkismetError> {
    match body {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(AkismetError::Server(other.to_string())),
    }
}

/// submit-spam / submit-ham: only the exact acknowledgement counts.
///
/// # Errors
///
/// Returns [`AkismetError::Server`] with the raw body otherwise.
pub fn interpret_submit(body: &str) -> Result<(), AkismetError> {
    if body == SUBMIT_ACK {
        Ok(())
    } else {
        Err(AkismetError::Server(body.to_string()))
    }
}

/// verify-key: decided by status code alone.
///
/// # Errors
///
/// Returns [`AkismetError::Server`] with the body for any status but 200.
pub fn interpret_verify(status: u16, body: &str) -> Result<bool, AkismetError> {
    if status == 200 {
        Ok(true)
    } else {
        Err(AkismetError::Server(body.to_string()))
    }
}
