//! Error type for the API client

use super::ResponseMeta;
use reqwest::StatusCode;
use serde::Deserialize;
use std::{borrow::Cow, fmt};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: connection, TLS, cancellation. Never
    /// retried.
    #[error("http transport error")]
    Http(#[from] reqwest::Error),

    /// A 2xx response carried a body that did not decode.
    #[error("error decoding response body")]
    Json(#[from] serde_json::Error),

    /// Non-2xx response from the provider. `meta` is still populated from
    /// the failing response's headers.
    #[error("api error ({status}): {error}")]
    Api {
        status: StatusCode,
        meta: Box<ResponseMeta>,
        error: ApiError,
    },

    /// 403 with an exhausted rate-limit window.
    #[error("rate limit exceeded, resets at {}", .meta.rate.reset)]
    RateLimit { meta: Box<ResponseMeta> },

    #[error("{0}")]
    Message(Cow<'static, str>),
}

impl Error {
    /// HTTP status of the failing response, if the provider answered at
    /// all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::RateLimit { .. } => Some(StatusCode::FORBIDDEN),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }

    /// The provider's human-readable error message, e.g. "Not Found".
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api { error, .. } => Some(&error.message),
            _ => None,
        }
    }

    /// Response metadata captured from a failing call, when there was a
    /// response to capture it from.
    pub fn meta(&self) -> Option<&ResponseMeta> {
        match self {
            Error::Api { meta, .. } | Error::RateLimit { meta } => Some(meta),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

/// Error body returned by the provider on non-2xx responses.
///
/// GitHub API docs: https://developer.github.com/v3/#client-errors
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiError {
    /// Stand-in for responses whose body is empty or not the documented
    /// error shape.
    pub(super) fn from_status(status: StatusCode) -> Self {
        Self {
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_owned(),
            documentation_url: None,
            errors: Vec::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}

#[cfg(test)]
mod test {
    use super::{ApiError, ApiErrorDetail};

    #[test]
    fn api_error_body() {
        const ERROR_JSON: &str = r#"
            {
                "message": "Validation Failed",
                "errors": [
                    {
                        "resource": "Deployment",
                        "field": "ref",
                        "code": "invalid"
                    }
                ],
                "documentation_url": "https://developer.github.com/v3/repos/deployments/"
            }"#;

        let error: ApiError = serde_json::from_str(ERROR_JSON).unwrap();
        assert_eq!(error.message, "Validation Failed");
        assert_eq!(error.errors.len(), 1);
        match &error.errors[0] {
            ApiErrorDetail::Code { field, .. } => assert_eq!(field, "ref"),
            other => panic!("unexpected detail: {:?}", other),
        }
    }

    #[test]
    fn api_error_message_only() {
        let error: ApiError = serde_json::from_str(r#"{"message": "Not Found"}"#).unwrap();
        assert_eq!(error.to_string(), "Not Found");
        assert!(error.errors.is_empty());
    }
}
