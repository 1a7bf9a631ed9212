use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),
    #[error("invalid api key: {0}")]
    InvalidApiKey(String),
    #[error("unsupported mode: api key must not be provided for the public endpoint")]
    UnsupportedMode,
    #[error("network response not ok: {status_code} {message}")]
    InvalidStatusCode {
        status_code: StatusCode,
        message: String,
    },
    #[error("request error: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("deserialization error: {0}")]
    Decode(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("graphql errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
}

/// Coarse classification of [`Error`]. Every kind is terminal for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised before any network access.
    Configuration,
    Transport,
    UnsupportedMode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedChain(_) | Error::InvalidApiKey(_) => ErrorKind::Configuration,
            Error::UnsupportedMode => ErrorKind::UnsupportedMode,
            Error::InvalidStatusCode { .. }
            | Error::Request(_)
            | Error::Decode(_)
            | Error::GraphQl(_) => ErrorKind::Transport,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err.into())
    }
}
