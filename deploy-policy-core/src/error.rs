//! Crate-level error types for the lifecycle controller.

use crate::github::GithubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    /// A stored identifier did not split into the three expected parts.
    #[error("unexpected ID format ({id:?}); expected {left}:{center}:{right}")]
    MalformedIdentifier {
        id: String,
        left: &'static str,
        center: &'static str,
        right: &'static str,
    },

    /// The policy-id component of an identifier is not numeric.
    #[error("invalid branch policy id {value:?}: expected a number")]
    InvalidPolicyId { value: String },

    /// A component that would be joined into an identifier contains the
    /// delimiter itself, which would make the token ambiguous to decode.
    #[error("{field} {value:?} must not contain ':'")]
    DelimiterInComponent {
        field: &'static str,
        value: String,
    },

    /// The environment component of an identifier is not valid
    /// percent-encoded UTF-8.
    #[error("invalid environment encoding {value:?}")]
    InvalidEnvironment { value: String },

    /// A required configuration value is unset.
    #[error("missing required configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// The identifier refers to a policy that no longer exists remotely,
    /// so there is nothing to import.
    #[error("cannot import {id:?}: the branch policy does not exist on GitHub")]
    ImportGone { id: String },

    /// Any remote failure, propagated without retry or suppression.
    #[error(transparent)]
    Github(#[from] GithubError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
