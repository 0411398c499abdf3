//! Create logic for the branch-policy service

use crate::error::ControllerResult;
use crate::identifier::{escape_environment, ResourceId};
use crate::types::{DesiredPolicy, ReadOutcome};
use log::debug;

impl super::service::BranchPolicyService {
    /// Create the remote branch policy and return its identifier together
    /// with the outcome of the confirmation read.
    ///
    /// The remote assigns the policy id; the identifier is encoded from
    /// `(repository, escapedEnvironment, policyId)` and then immediately
    /// re-read so the caller records observed rather than assumed
    /// attributes. Remote failures surface unmodified; a create that
    /// succeeded remotely is not rolled back when the confirmation read
    /// fails.
    pub async fn create(
        &self,
        desired: &DesiredPolicy,
    ) -> ControllerResult<(ResourceId, ReadOutcome)> {
        let escaped_env = escape_environment(&desired.environment);

        let payload = self
            .client
            .create_branch_policy(
                &self.owner,
                &desired.repository,
                &escaped_env,
                &desired.branch_pattern,
            )
            .await?;

        debug!(
            "created branch policy {} for {}/{}/{}",
            payload.id, self.owner, desired.repository, desired.environment
        );

        let id = ResourceId::new(desired.repository.clone(), escaped_env, payload.id)?;
        let outcome = self.read(&id).await?;
        Ok((id, outcome))
    }
}
