//! Import logic for the branch-policy service

use crate::error::{ControllerError, ControllerResult};
use crate::github::GithubError;
use crate::types::{PolicyState, ReadOutcome};

impl super::service::BranchPolicyService {
    /// Adopt an existing remote policy from its opaque identifier token.
    ///
    /// Passthrough import: the token is decoded as-is and a read populates
    /// the full declared state. Unlike `read`, a policy that does not exist
    /// is an error here since there is nothing to adopt.
    pub async fn import(&self, token: &str) -> ControllerResult<PolicyState> {
        match self.read_token(token).await? {
            ReadOutcome::Found(state) => Ok(state),
            ReadOutcome::Gone => Err(ControllerError::ImportGone {
                id: token.to_string(),
            }),
            // The import read carries no cache validator, so a 304 is a
            // remote anomaly rather than a meaningful outcome.
            ReadOutcome::NotModified => Err(GithubError::NotModified.into()),
        }
    }
}
