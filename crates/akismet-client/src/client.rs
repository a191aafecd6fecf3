//! The Akismet client
//!
//! Four operations share one shape: validate locally, POST a form, interpret a
//! plain-text answer. Nothing is cached or retried, and validation failures
//! never reach the network.

use akismet_core::operation::Operation;
use akismet_core::params::{BLOG, validate};
use akismet_core::response::{interpret_check, interpret_submit, interpret_verify};
use akismet_core::{AkismetError, ClientConfig, ParameterSet, ReportKind};

use crate::transport::{FormRequest, RawResponse, ReqwestTransport, Transport};

/// Akismet API client
///
/// Immutable after construction. Every method takes `&self`, so one client can
/// serve concurrent callers when its transport is `Sync`.
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Build a client over `reqwest`, honouring `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`AkismetError::Transport`] if the HTTP client cannot be built.
    pub fn connect(config: ClientConfig) -> Result<Self, AkismetError> {
        let transport = ReqwestTransport::new(config.timeout_duration())?;
        Ok(Self::new(config, transport))
    }
}

impl<T: Transport> Client<T> {
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `"<fragment> | Pykismet/0.1.1"`
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.config.composed_user_agent()
    }

    /// Ask whether a comment is spam. `true` means spam.
    ///
    /// Requires `user_ip`, `user_agent` and `referrer`; `blog` falls back to the
    /// client's site URL.
    ///
    /// # Errors
    ///
    /// Validation errors before any request, [`AkismetError::Server`] for any
    /// body other than `"true"`/`"false"`, or [`AkismetError::Transport`].
    pub fn check(&self, parameters: &ParameterSet) -> Result<bool, AkismetError> {
        let resp = self.send_validated(Operation::CommentCheck, parameters)?;
        let spam = interpret_check(&resp.body)
            .inspect_err(|_| log_rejection(Operation::CommentCheck, &resp))?;
        tracing::debug!(target: "akismet", spam, "comment-check classified");
        Ok(spam)
    }

    /// Verify the API key for `site_url`, or the client's site URL.
    ///
    /// An empty site URL counts as absent, from either source.
    ///
    /// # Errors
    ///
    /// [`AkismetError::MissingParameter`] without a site URL,
    /// [`AkismetError::MissingApiKey`] without a key,
    /// [`AkismetError::Server`] for any status but 200.
    pub fn verify_key(&self, site_url: Option<&str>) -> Result<bool, AkismetError> {
        let blog = site_url
            .filter(|s| !s.is_empty())
            .or_else(|| self.config.blog_url.as_deref().filter(|s| !s.is_empty()))
            .ok_or_else(|| AkismetError::MissingParameter(BLOG.to_string()))?;
        let api_key = self.api_key()?;

        let request = FormRequest {
            url: Operation::VerifyKey.url(api_key),
            headers: Vec::new(),
            form: vec![
                (BLOG.to_string(), blog.to_string()),
                ("key".to_string(), api_key.to_string()),
            ],
        };
        let resp = self.send(Operation::VerifyKey, &request)?;
        let valid = interpret_verify(resp.status, &resp.body)
            .inspect_err(|_| log_rejection(Operation::VerifyKey, &resp))?;
        tracing::debug!(target: "akismet", "api key verified");
        Ok(valid)
    }

    /// Report a comment that should have been classified as spam.
    ///
    /// # Errors
    ///
    /// Validation errors before any request, [`AkismetError::Server`] unless
    /// the service acknowledges, or [`AkismetError::Transport`].
    pub fn submit_spam(&self, parameters: &ParameterSet) -> Result<(), AkismetError> {
        self.submit(ReportKind::Spam, parameters)
    }

    /// Report a false positive.
    ///
    /// # Errors
    ///
    /// Same as [`Client::submit_spam`].
    pub fn submit_ham(&self, parameters: &ParameterSet) -> Result<(), AkismetError> {
        self.submit(ReportKind::Ham, parameters)
    }

    fn submit(&self, kind: ReportKind, parameters: &ParameterSet) -> Result<(), AkismetError> {
        let operation = kind.operation();
        let resp = self.send_validated(operation, parameters)?;
        interpret_submit(&resp.body).inspect_err(|_| log_rejection(operation, &resp))?;
        tracing::debug!(target: "akismet", %operation, "submission acknowledged");
        Ok(())
    }

    fn api_key(&self) -> Result<&str, AkismetError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(AkismetError::MissingApiKey)
    }

    /// Shared path for comment-check and submissions: key, parameters, send.
    fn send_validated(
        &self,
        operation: Operation,
        parameters: &ParameterSet,
    ) -> Result<RawResponse, AkismetError> {
        let api_key = self.api_key()?;
        let resolved = validate(operation, parameters, self.config.blog_url.as_deref())?;

        let request = FormRequest {
            url: operation.url(api_key),
            headers: vec![("User-Agent".to_string(), self.config.request_user_agent())],
            form: resolved.to_pairs(),
        };
        self.send(operation, &request)
    }

    fn send(
        &self,
        operation: Operation,
        request: &FormRequest,
    ) -> Result<RawResponse, AkismetError> {
        // url carries the key; log the operation only
        tracing::debug!(
            target: "akismet",
            %operation,
            fields = request.form.len(),
            "sending request"
        );
        let resp = self.transport.post_form(request)?;
        tracing::debug!(target: "akismet", %operation, status = resp.status, "response received");
        Ok(resp)
    }
}

fn log_rejection(operation: Operation, resp: &RawResponse) {
    tracing::warn!(
        target: "akismet",
        %operation,
        status = resp.status,
        body = %resp.body,
        "unexpected response from Akismet"
    );
}
