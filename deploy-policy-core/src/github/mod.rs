//! GitHub API integration: branch-policy client wrapper and error
//! classification by HTTP status.

pub(crate) mod branch_policy_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    /// The remote entity does not exist (HTTP 404).
    #[error("branch policy not found")]
    NotFound,

    /// The remote reports no change since the last observation (HTTP 304).
    #[error("branch policy not modified")]
    NotModified,

    /// Any other non-success response from the API.
    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Connection, TLS, or protocol-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client could not be constructed from the given configuration.
    #[error("client configuration error: {0}")]
    Config(String),
}

pub type GithubResult<T> = Result<T, GithubError>;
