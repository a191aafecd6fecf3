//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::operation::AKISMET_USER_AGENT;

/// Which string goes into the `User-Agent` header of check and submit calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAgentHeader {
    /// The fixed library identifier (`Pykismet/0.1.1`)
    #[default]
    Library,
    /// The per-client `"<fragment> | Pykismet/0.1.1"` string
    Composed,
}

/// Client configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Akismet API key; every call fails without one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Default site URL, used when a call does not supply `blog`
    #[serde(default)]
    pub blog_url: Option<String>,

    /// Caller identifier, composed with the library tag
    #[serde(default)]
    pub user_agent: String,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default)]
    pub timeout: Option<f64>,

    /// User-Agent header policy for check/submit calls
    #[serde(default)]
    pub user_agent_header: UserAgentHeader,
}

impl ClientConfig {
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        blog_url: Option<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            blog_url,
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout.map(|d| d.as_secs_f64());
        self
    }

    #[must_use]
    pub fn with_user_agent_header(mut self, policy: UserAgentHeader) -> Self {
        self.user_agent_header = policy;
        self
    }

    /// `"<fragment> | Pykismet/0.1.1"`
    #[must_use]
    pub fn composed_user_agent(&self) -> String {
        format!("{} | {AKISMET_USER_AGENT}", self.user_agent)
    }

    /// Header value for check and submit calls under the configured policy.
    #[must_use]
    pub fn request_user_agent(&self) -> String {
        match self.user_agent_header {
            UserAgentHeader::Library => AKISMET_USER_AGENT.to_string(),
            UserAgentHeader::Composed => self.composed_user_agent(),
        }
    }

    /// Timeout as a [`Duration`]. Non-finite or non-positive values mean none.
    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(Duration::from_secs_f64)
    }

    /// Load config from file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load from default location (.akismet.toml)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_default_in(Path::new("."))
    }

    /// Load the first default config file found under `dir`
    pub fn load_default_in(dir: &Path) -> Result<Self, ConfigError> {
        for name in DEFAULT_CONFIG_FILES {
            let path = dir.join(name);
            if path.exists() {
                return Self::load(&path);
            }
        }

        Ok(Self::default())
    }

    /// Create example config file
    pub fn example() -> &'static str {
        r#"# akismet client configuration

# API key from https://akismet.com/account/
api_key = "your-api-key"

# Site on whose behalf requests are made (used when `blog` is not passed)
blog_url = "https://example.org"

# Identifies your application; sent as "<user_agent> | Pykismet/0.1.1"
# when user_agent_header = "composed"
user_agent = "MyBlog/1.0"

# "library" sends only "Pykismet/0.1.1" (default), "composed" sends the full string
# user_agent_header = "composed"

# Request timeout in seconds (transport default when unset)
# timeout = 10.0
"#
    }
}

/// Files searched by [`ClientConfig::load_default`], in order.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = [".akismet.toml", ".akismet.json", "akismet.toml"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
}
