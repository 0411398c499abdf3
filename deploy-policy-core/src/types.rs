//! Shared types for the branch-policy lifecycle.

use serde::{Deserialize, Serialize};

/// Declared attributes of a deployment branch policy.
///
/// `repository` and `environment` are immutable after creation; changing
/// either means replacing the resource. Only `branch_pattern` may change in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredPolicy {
    pub repository: String,
    pub environment: String,
    pub branch_pattern: String,
}

/// The complete durable record held by the external reconciler between
/// invocations: the opaque identifier plus the three declared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyState {
    /// Opaque identifier token, `repository:escapedEnvironment:policyId`.
    pub id: String,
    pub repository: String,
    /// The declared (unescaped) environment name.
    pub environment: String,
    pub branch_pattern: String,
}

/// Result of a refresh against the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The policy exists; observed attributes refreshed.
    Found(PolicyState),
    /// The remote reported no change (HTTP 304); prior observed state
    /// stands.
    NotModified,
    /// The policy no longer exists remotely (HTTP 404); the stored
    /// identifier is stale and should be cleared by the caller. This is an
    /// observation, not an error.
    Gone,
}
