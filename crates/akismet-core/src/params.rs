//! Caller parameter sets and the shared validation rules
//!
//! comment-check, submit-spam and submit-ham all accept the same key-set, so a
//! single schema serves all three. The caller's set is never modified; the
//! validated copy (with `blog` filled in) is what goes on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AkismetError;
use crate::operation::Operation;

/// Site URL parameter. Falls back to the client's default when absent.
pub const BLOG: &str = "blog";

/// Every parameter name the service recognises for comment-check and submissions.
pub static ALLOWED_PARAMETERS: &[&str] = &[
    "blog",
    "user_ip",
    "user_agent",
    "referrer",
    "permalink",
    "content_type",
    "comment_author",
    "comment_author_email",
    "comment_author_url",
    "comment_content",
    "comment_date_gmt",
    "comment_post_modified_gmt",
    "blog_lang",
    "blog_charset",
    "is_test",
];

/// Ordered name → value mapping sent as the form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys not in [`ALLOWED_PARAMETERS`], in sorted order.
    #[must_use]
    pub fn unrecognised_keys(&self) -> Vec<String> {
        self.keys()
            .filter(|k| !ALLOWED_PARAMETERS.contains(k))
            .map(str::to_string)
            .collect()
    }

    /// Form body pairs in key order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ParameterSet {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Apply the shared validation contract for a form operation.
///
/// Checks run in order: `blog` resolution, required parameters, unrecognised
/// keys. Returns the set to send, with `blog` injected from `default_blog`
/// when the caller left it out.
///
/// # Errors
///
/// - [`AkismetError::MissingParameter`] for an unresolvable `blog` or a missing
///   required parameter
/// - [`AkismetError::ExtraParameters`] naming every key outside the schema
/// - [`AkismetError::Internal`] if `operation` takes no parameter set
pub fn validate(
    operation: Operation,
    params: &ParameterSet,
    default_blog: Option<&str>,
) -> Result<ParameterSet, AkismetError> {
    let Some(required) = operation.required_parameters() else {
        return Err(AkismetError::Internal(format!(
            "{operation} has no parameter schema"
        )));
    };

    let mut resolved = params.clone();
    if !resolved.contains(BLOG) {
        let Some(blog) = default_blog else {
            return Err(AkismetError::MissingParameter(BLOG.to_string()));
        };
        resolved.insert(BLOG, blog);
    }

    if let Some(missing) = required.iter().find(|name| !resolved.contains(name)) {
        return Err(AkismetError::MissingParameter((*missing).to_string()));
    }

    let leftovers = resolved.unrecognised_keys();
    if !leftovers.is_empty() {
        return Err(AkismetError::ExtraParameters(leftovers));
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_params() -> ParameterSet {
        ParameterSet::from([
            ("user_ip", "1.2.3.4"),
            ("user_agent", "UA"),
            ("referrer", "r"),
        ])
    }

    #[test]
    fn injects_default_blog() {
        let params = check_params();
        let resolved =
            validate(Operation::CommentCheck, &params, Some("https://example.org")).unwrap();
        assert_eq!(resolved.get("blog"), Some("https://example.org"));
        // caller's set untouched
        assert!(!params.contains("blog"));
    }

    #[test]
    fn explicit_blog_wins_over_default() {
        let params = check_params().with("blog", "https://mine.example");
        let resolved =
            validate(Operation::CommentCheck, &params, Some("https://example.org")).unwrap();
        assert_eq!(resolved.get("blog"), Some("https://mine.example"));
    }

    #[test]
    fn missing_blog_without_default() {
        let err = validate(Operation::CommentCheck, &check_params(), None).unwrap_err();
        assert_eq!(err, AkismetError::MissingParameter("blog".into()));
    }

    #[test]
    fn required_parameters_checked_in_order() {
        let err = validate(Operation::CommentCheck, &ParameterSet::new(), Some("b")).unwrap_err();
        assert_eq!(err, AkismetError::MissingParameter("user_ip".into()));

        let params = ParameterSet::from([("user_ip", "1.2.3.4")]);
        let err = validate(Operation::SubmitHam, &params, Some("b")).unwrap_err();
        assert_eq!(err, AkismetError::MissingParameter("user_agent".into()));

        let params = params.with("user_agent", "UA");
        let err = validate(Operation::CommentCheck, &params, Some("b")).unwrap_err();
        assert_eq!(err, AkismetError::MissingParameter("referrer".into()));
    }

    #[test]
    fn submissions_do_not_need_referrer() {
        let params = ParameterSet::from([("user_ip", "1.2.3.4"), ("user_agent", "UA")]);
        assert!(validate(Operation::SubmitSpam, &params, Some("b")).is_ok());
        assert!(validate(Operation::SubmitHam, &params, Some("b")).is_ok());
    }

    #[test]
    fn extra_parameters_are_named() {
        let params = check_params().with("bogus_key", "x").with("another", "y");
        let err = validate(Operation::CommentCheck, &params, Some("b")).unwrap_err();
        assert_eq!(
            err,
            AkismetError::ExtraParameters(vec!["another".into(), "bogus_key".into()])
        );
    }

    #[test]
    fn missing_parameter_reported_before_extras() {
        let params = ParameterSet::from([("bogus_key", "x")]);
        let err = validate(Operation::SubmitSpam, &params, Some("b")).unwrap_err();
        assert_eq!(err, AkismetError::MissingParameter("user_ip".into()));
    }

    #[test]
    fn every_allowed_parameter_accepted() {
        let params: ParameterSet = ALLOWED_PARAMETERS.iter().map(|k| (*k, "v")).collect();
        let resolved = validate(Operation::CommentCheck, &params, None).unwrap();
        assert_eq!(resolved.keys().count(), ALLOWED_PARAMETERS.len());
    }

    #[test]
    fn verify_key_has_no_schema() {
        let err = validate(Operation::VerifyKey, &check_params(), Some("b")).unwrap_err();
        assert!(matches!(err, AkismetError::Internal(_)));
    }

    #[test]
    fn pairs_are_key_ordered() {
        let params = ParameterSet::from([("user_ip", "1"), ("blog", "b")]);
        assert_eq!(
            params.to_pairs(),
            vec![
                ("blog".to_string(), "b".to_string()),
                ("user_ip".to_string(), "1".to_string()),
            ]
        );
    }
}
