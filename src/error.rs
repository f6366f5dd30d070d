use std::fmt;

use http::StatusCode;
use thiserror::Error;

/// Which interceptor chain a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Request,
    Response,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match *self {
            Stage::Request => "request",
            Stage::Response => "response",
        };
        f.write_str(stage)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a status outside of 2xx
    #[error("HTTP error! status: {status} ({url})")]
    RequestFailed { status: StatusCode, url: String },

    /// The request never produced a response (DNS, refused connection, ...)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The body of a successful response was not the expected JSON
    #[error("Malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("{stage} interceptor #{index} failed: {source}")]
    Interceptor {
        stage: Stage,
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
}

impl Error {
    /// Status code of a [`Error::RequestFailed`], `None` for every other kind.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, Error::RequestFailed { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}
