//! Akismet API operations and their endpoints

use std::fmt;

/// Library identifier sent as the `User-Agent` header.
pub const AKISMET_USER_AGENT: &str = "Pykismet/0.1.1";

/// Key verification is the only call without a per-key subdomain.
pub const VERIFY_KEY_URL: &str = "https://rest.akismet.com/1.1/verify-key";

const REST_HOST: &str = "rest.akismet.com/1.1";

/// One of the four Akismet REST calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    VerifyKey,
    CommentCheck,
    SubmitSpam,
    SubmitHam,
}

impl Operation {
    /// Endpoint path segment, e.g. `comment-check`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerifyKey => "verify-key",
            Self::CommentCheck => "comment-check",
            Self::SubmitSpam => "submit-spam",
            Self::SubmitHam => "submit-ham",
        }
    }

    /// Full endpoint URL for this operation.
    ///
    /// Everything but `verify-key` is addressed through the key's own subdomain.
    #[must_use]
    pub fn url(self, api_key: &str) -> String {
        match self {
            Self::VerifyKey => VERIFY_KEY_URL.to_string(),
            Self::CommentCheck | Self::SubmitSpam | Self::SubmitHam => {
                format!("https://{api_key}.{REST_HOST}/{}", self.as_str())
            }
        }
    }

    /// Parameters that must be present after `blog` has been resolved.
    ///
    /// `None` for operations that do not take a caller parameter set.
    #[must_use]
    pub const fn required_parameters(self) -> Option<&'static [&'static str]> {
        match self {
            Self::VerifyKey => None,
            Self::CommentCheck => Some(&["user_ip", "user_agent", "referrer"]),
            Self::SubmitSpam | Self::SubmitHam => Some(&["user_ip", "user_agent"]),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a submission reports: missed spam or a false positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Spam,
    Ham,
}

impl ReportKind {
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::Spam => Operation::SubmitSpam,
            Self::Ham => Operation::SubmitHam,
        }
    }
}
